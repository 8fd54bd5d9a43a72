//! Synthetic rate series generation.
//!
//! Produces one year of daily exchange rates and volumes per currency
//! pair as a parametrized random walk: a slow seasonal oscillation
//! shared across pairs plus an independent Gaussian step per (day, pair).

use crate::core::currency::CurrencyPair;
use crate::core::rates::{RateDataset, RatePoint};
use chrono::{Duration, NaiveDate};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use statrs::distribution::Normal;

/// Amplitude of the shared seasonal oscillation.
const TREND_AMPLITUDE: f64 = 0.05;
/// Frequency of the seasonal oscillation, in radians per day.
const TREND_FREQUENCY: f64 = 0.02;
/// Daily volume is drawn from this range; upper bound exclusive.
const VOLUME_RANGE: std::ops::Range<u64> = 1_000_000..8_000_000;

/// Static generation parameters for one currency pair.
#[derive(Debug, Clone)]
pub struct PairConfig {
    /// The pair being simulated.
    pub pair: CurrencyPair,
    /// Anchor rate the walk oscillates around. Must be positive.
    pub base_rate: Decimal,
    /// Standard deviation of the daily Gaussian step. Must be positive.
    pub volatility: f64,
}

impl PairConfig {
    /// Create a pair configuration.
    ///
    /// # Panics
    ///
    /// Panics if `base_rate` or `volatility` is not positive.
    pub fn new(pair: CurrencyPair, base_rate: Decimal, volatility: f64) -> Self {
        assert!(
            base_rate > Decimal::ZERO,
            "Base rate must be positive, got {} for {}",
            base_rate,
            pair
        );
        assert!(
            volatility > 0.0,
            "Volatility must be positive, got {} for {}",
            volatility,
            pair
        );
        Self {
            pair,
            base_rate,
            volatility,
        }
    }
}

/// Configuration for generating a rate dataset.
///
/// The date range is inclusive of both endpoints. The default covers
/// 2023-01-01 through 2024-01-01 with the six standard pairs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First observation date (inclusive).
    pub start_date: NaiveDate,
    /// Last observation date (inclusive).
    pub end_date: NaiveDate,
    /// Pairs to simulate.
    pub pairs: Vec<PairConfig>,
}

impl GeneratorConfig {
    /// Number of days covered by the range, both endpoints inclusive.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let pair = |s: &str| s.parse().expect("valid pair literal");
        let rate = |s: &str| s.parse().expect("valid rate literal");
        Self {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid calendar date"),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date"),
            pairs: vec![
                PairConfig::new(pair("USD/EUR"), rate("0.85"), 0.01),
                PairConfig::new(pair("USD/GBP"), rate("0.75"), 0.012),
                PairConfig::new(pair("USD/JPY"), rate("110.0"), 1.5),
                PairConfig::new(pair("USD/INR"), rate("83.0"), 0.8),
                PairConfig::new(pair("EUR/GBP"), rate("0.88"), 0.008),
                PairConfig::new(pair("GBP/INR"), rate("110.0"), 1.2),
            ],
        }
    }
}

/// Generate a rate dataset from the given configuration and RNG.
///
/// Every (day, pair) combination yields exactly one point:
/// `rate = base_rate * (1 + trend + step)` rounded to 4 decimal places,
/// where `trend = sin(i * 0.02) * 0.05` for day index `i` and `step`
/// is drawn from `Normal(0, volatility)`. Rates are floored at 0.0001
/// so an extreme draw cannot produce a non-positive rate. Volumes are
/// uniform over `[1_000_000, 8_000_000)` (upper bound exclusive).
///
/// # Panics
///
/// Panics if `end_date` precedes `start_date`, no pairs are configured,
/// or a pair's volatility is not positive.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> RateDataset {
    assert!(
        config.start_date <= config.end_date,
        "Generator range must not be inverted: {} > {}",
        config.start_date,
        config.end_date
    );
    assert!(!config.pairs.is_empty(), "At least one pair is required");

    let steps: Vec<Normal> = config
        .pairs
        .iter()
        .map(|pc| Normal::new(0.0, pc.volatility).expect("pair volatility must be positive"))
        .collect();

    let days = config.day_count();
    let mut points = Vec::with_capacity(days as usize * config.pairs.len());

    for i in 0..days {
        let date = config.start_date + Duration::days(i);
        let trend = (i as f64 * TREND_FREQUENCY).sin() * TREND_AMPLITUDE;

        for (pc, step) in config.pairs.iter().zip(&steps) {
            let base: f64 = pc.base_rate.to_string().parse().unwrap_or(0.0);
            let change = step.sample(rng);
            let rate = Decimal::from_f64_retain(base * (1.0 + trend + change))
                .unwrap_or(pc.base_rate)
                .round_dp(4)
                .max(Decimal::new(1, 4));
            let volume = rng.gen_range(VOLUME_RANGE);
            points.push(RatePoint::new(date, pc.pair.clone(), rate, volume));
        }
    }

    RateDataset::from_points(points)
}

/// Generate a reproducible dataset from a seed.
pub fn generate_seeded(config: &GeneratorConfig, seed: u64) -> RateDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

/// Generate the default one-year, six-pair dataset with an unseeded RNG.
///
/// Output varies run to run; use [`generate_seeded`] when reproducibility
/// matters.
pub fn generate_default() -> RateDataset {
    generate(&GeneratorConfig::default(), &mut rand::thread_rng())
}
