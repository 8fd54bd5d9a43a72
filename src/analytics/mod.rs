//! Filter & analytics engine.
//!
//! Every function here is a pure function of `(dataset, selection)`:
//! no hidden state, nothing cached, identical inputs give identical
//! outputs.

pub mod filter;
pub mod risk;
pub mod stats;
pub mod summary;

use crate::analytics::filter::Period;
use thiserror::Error;

/// Errors arising from the analytics pipeline.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The filtered view has no rows. The analysis halts for this
    /// interaction; the session stays usable with different filters.
    #[error("no data for the current selection ({pair_count} pairs, {period}); adjust the filters")]
    EmptySelection { pair_count: usize, period: Period },
}
