//! # fx-dashboard
//!
//! Synthetic currency exchange rate simulation and analytics engine.
//!
//! Generates one year of daily exchange rates for a configurable set
//! of currency pairs, then answers dashboard queries over the result:
//! filtered views, summary metrics, per-pair statistics, basket
//! aggregation and volatility-based risk classification. Chart
//! rendering and UI controls are external consumers of the data
//! contracts exported here.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currency pairs, rate points, datasets
//! - **simulation** — Seedable random-walk rate series generation
//! - **analytics** — Pure filtering, statistics and risk classification
//! - **dashboard** — Session-scoped caching and report assembly

pub mod analytics;
pub mod core;
pub mod dashboard;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analytics::filter::{filter_dataset, FilterSelection, FilteredView, Period};
    pub use crate::analytics::risk::{classify_risk, risk_buckets, RiskBuckets, RiskTier};
    pub use crate::analytics::stats::{basket_series, min_max_by_pair, per_pair_stats};
    pub use crate::analytics::summary::{summary_metrics, SummaryMetrics};
    pub use crate::analytics::AnalyticsError;
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::rates::{RateDataset, RatePoint};
    pub use crate::dashboard::report::DashboardReport;
    pub use crate::dashboard::session::DashboardSession;
    pub use crate::simulation::generator::{
        generate, generate_default, generate_seeded, GeneratorConfig, PairConfig,
    };
}
