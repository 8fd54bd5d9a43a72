//! Volatility-based risk classification.
//!
//! Tiers are assigned by thresholding raw rate standard deviation, so
//! tier meaning scales with pair magnitude (a JPY-scale pair reaches
//! High far sooner than a EUR-scale pair). This is an intentional
//! property of the dashboard, not a normalization bug.

use crate::analytics::filter::FilteredView;
use crate::analytics::stats::{pair_rates, sample_std_dev};
use crate::core::currency::CurrencyPair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold at and above which a standard deviation is High risk.
pub const HIGH_RISK_THRESHOLD: f64 = 5.0;
/// Threshold at and above which a standard deviation is Medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 1.0;

/// Risk tier assigned from rate standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a standard deviation into a risk tier.
///
/// Boundaries are inclusive upwards: exactly 1.0 is Medium, exactly
/// 5.0 is High.
pub fn classify_risk(std_dev: f64) -> RiskTier {
    if std_dev >= HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if std_dev >= MEDIUM_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// A selected pair together with its per-pair volatility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBucketEntry {
    pub pair: CurrencyPair,
    pub volatility: f64,
}

/// The selected pairs partitioned into risk tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskBuckets {
    pub low: Vec<RiskBucketEntry>,
    pub medium: Vec<RiskBucketEntry>,
    pub high: Vec<RiskBucketEntry>,
}

impl RiskBuckets {
    /// Number of pairs across all three tiers.
    pub fn len(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the selected pairs into risk tiers by per-pair volatility.
///
/// Each pair's standard deviation is computed independently over its
/// rows in the view. A pair with no rows in the window joins no tier.
pub fn risk_buckets(view: &FilteredView) -> RiskBuckets {
    let mut buckets = RiskBuckets::default();
    for pair in &view.selection().pairs {
        let rates = pair_rates(view, pair);
        if rates.is_empty() {
            continue;
        }
        let volatility = sample_std_dev(&rates);
        let entry = RiskBucketEntry {
            pair: pair.clone(),
            volatility,
        };
        match classify_risk(volatility) {
            RiskTier::Low => buckets.low.push(entry),
            RiskTier::Medium => buckets.medium.push(entry),
            RiskTier::High => buckets.high.push(entry),
        }
    }
    buckets
}
