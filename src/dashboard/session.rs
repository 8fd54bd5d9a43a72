//! Session-scoped dataset ownership.
//!
//! The dataset is generated once per session and memoized so repeated
//! filter interactions reuse the same table instead of regenerating
//! (and visually reshuffling) it. Only an explicit [`reset`] or
//! [`reseed`] discards the cached dataset.
//!
//! [`reset`]: DashboardSession::reset
//! [`reseed`]: DashboardSession::reseed

use crate::analytics::filter::{filter_dataset, FilterSelection};
use crate::analytics::AnalyticsError;
use crate::core::rates::RateDataset;
use crate::dashboard::report::DashboardReport;
use crate::simulation::generator::{generate, generate_seeded, GeneratorConfig};
use log::{debug, info};

/// Owner of one dashboard session's generated dataset.
pub struct DashboardSession {
    config: GeneratorConfig,
    seed: Option<u64>,
    dataset: Option<RateDataset>,
}

impl DashboardSession {
    /// A session that generates with an unseeded RNG (demo mode:
    /// output varies run to run).
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            seed: None,
            dataset: None,
        }
    }

    /// A session whose dataset is reproducible from `seed`.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            seed: Some(seed),
            dataset: None,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The session dataset, generated on first access and cached.
    pub fn dataset(&mut self) -> &RateDataset {
        let Self {
            config,
            seed,
            dataset,
        } = self;
        dataset.get_or_insert_with(|| {
            let generated = match seed {
                Some(seed) => generate_seeded(config, *seed),
                None => generate(config, &mut rand::thread_rng()),
            };
            info!(
                "generated dataset {} ({} rows, {} pairs, {} days)",
                generated.id(),
                generated.len(),
                config.pairs.len(),
                config.day_count()
            );
            generated
        })
    }

    /// Filter the session dataset and assemble the full report.
    pub fn analyze(
        &mut self,
        selection: &FilterSelection,
    ) -> Result<DashboardReport, AnalyticsError> {
        let view = filter_dataset(self.dataset(), selection);
        debug!(
            "selection ({} pairs, {}) kept {} rows",
            selection.pairs.len(),
            selection.period,
            view.len()
        );
        DashboardReport::build(&view)
    }

    /// Discard the cached dataset; the next access regenerates it.
    pub fn reset(&mut self) {
        self.dataset = None;
    }

    /// Pin a new seed and discard the cached dataset.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.dataset = None;
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
