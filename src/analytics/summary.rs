//! Pooled summary metrics for the dashboard header.

use crate::analytics::filter::FilteredView;
use crate::analytics::risk::{classify_risk, RiskTier};
use crate::analytics::stats::{mean, rate_to_f64, sample_std_dev};
use serde::{Deserialize, Serialize};

/// The four headline metrics, recomputed on every filter change.
///
/// `risk_level` comes from the standard deviation pooled across every
/// row in the view, which is a different population than the per-pair
/// volatilities in the statistics table — a mixed selection can be
/// pooled-High while each pair is individually Low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of selected pairs (not the pairs actually present).
    pub pair_count: usize,
    /// Mean rate across all rows in the view, pooled over pairs.
    pub average_rate: f64,
    /// Total traded volume, in millions of units.
    pub total_volume_millions: f64,
    /// Tier of the pooled rate standard deviation.
    pub risk_level: RiskTier,
}

/// Compute the headline metrics for a filtered view.
pub fn summary_metrics(view: &FilteredView) -> SummaryMetrics {
    let rates: Vec<f64> = view.points().iter().map(|p| rate_to_f64(p.rate())).collect();
    let total_volume: u64 = view.points().iter().map(|p| p.volume()).sum();

    SummaryMetrics {
        pair_count: view.selection().pairs.len(),
        average_rate: mean(&rates),
        total_volume_millions: total_volume as f64 / 1_000_000.0,
        risk_level: classify_risk(sample_std_dev(&rates)),
    }
}
