use crate::core::currency::CurrencyPair;
use crate::core::rates::{RateDataset, RatePoint};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Time window for the analysis, anchored at the latest dataset date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Last30Days,
    Last90Days,
    Last6Months,
    /// The full dataset range.
    LastYear,
}

impl Period {
    /// Days subtracted from the latest date to obtain the window start,
    /// or `None` for the full range.
    pub fn offset_days(&self) -> Option<i64> {
        match self {
            Period::Last30Days => Some(30),
            Period::Last90Days => Some(90),
            Period::Last6Months => Some(180),
            Period::LastYear => None,
        }
    }

    /// The label shown by the UI layer.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Last30Days => "Last 30 Days",
            Period::Last90Days => "Last 90 Days",
            Period::Last6Months => "Last 6 Months",
            Period::LastYear => "Last Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised when a period string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period '{0}': expected last30, last90, last180 or year")]
pub struct PeriodParseError(pub String);

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last30" | "30" | "last 30 days" => Ok(Period::Last30Days),
            "last90" | "90" | "last 90 days" => Ok(Period::Last90Days),
            "last180" | "180" | "last 6 months" => Ok(Period::Last6Months),
            "year" | "all" | "last year" => Ok(Period::LastYear),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// A user's filter choice: which pairs to analyze over which window.
///
/// Pair order is preserved; per-pair outputs iterate pairs in the order
/// they were selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub pairs: Vec<CurrencyPair>,
    pub period: Period,
}

impl FilterSelection {
    pub fn new(pairs: Vec<CurrencyPair>, period: Period) -> Self {
        Self { pairs, period }
    }

    /// The window start for this selection over the given dataset.
    ///
    /// `None` when the dataset is empty.
    pub fn start_date(&self, dataset: &RateDataset) -> Option<NaiveDate> {
        match self.period.offset_days() {
            Some(days) => dataset.max_date().map(|max| max - Duration::days(days)),
            None => dataset.min_date(),
        }
    }
}

impl Default for FilterSelection {
    /// The reference dashboard's initial selection.
    fn default() -> Self {
        let pair = |s: &str| s.parse().expect("valid pair literal");
        Self {
            pairs: vec![pair("USD/EUR"), pair("USD/GBP"), pair("USD/INR")],
            period: Period::Last30Days,
        }
    }
}

/// The subset of a dataset matching one filter selection.
///
/// An empty view is a valid, detectable state; the report layer turns
/// it into [`AnalyticsError::EmptySelection`](crate::analytics::AnalyticsError)
/// before any metric is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredView {
    selection: FilterSelection,
    start_date: Option<NaiveDate>,
    points: Vec<RatePoint>,
}

impl FilteredView {
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The resolved window start, `None` for an empty source dataset.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Matching points, ordered by date.
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points belonging to one pair, in date order.
    pub fn pair_points<'a>(
        &'a self,
        pair: &'a CurrencyPair,
    ) -> impl Iterator<Item = &'a RatePoint> + 'a {
        self.points.iter().filter(move |p| p.pair() == pair)
    }
}

/// Apply a filter selection to a dataset.
///
/// Keeps rows whose pair is selected and whose date falls on or after
/// the window start. Filtering is idempotent: applying the same
/// selection to an already-filtered view returns the same rows.
pub fn filter_dataset(dataset: &RateDataset, selection: &FilterSelection) -> FilteredView {
    let start_date = selection.start_date(dataset);
    let points = match start_date {
        Some(start) => dataset
            .points()
            .iter()
            .filter(|p| p.date() >= start && selection.pairs.contains(p.pair()))
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    FilteredView {
        selection: selection.clone(),
        start_date,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dataset_over_days(days: u32) -> RateDataset {
        (1..=days)
            .map(|d| {
                RatePoint::new(
                    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Duration::days((d - 1) as i64),
                    "USD/EUR".parse().unwrap(),
                    dec!(0.85),
                    1_500_000,
                )
            })
            .collect()
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(Period::Last30Days.to_string(), "Last 30 Days");
        assert_eq!(Period::LastYear.to_string(), "Last Year");
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("last30".parse::<Period>().unwrap(), Period::Last30Days);
        assert_eq!("Last 6 Months".parse::<Period>().unwrap(), Period::Last6Months);
        assert_eq!("year".parse::<Period>().unwrap(), Period::LastYear);
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_window_cuts_at_offset() {
        let dataset = dataset_over_days(60);
        let selection =
            FilterSelection::new(vec!["USD/EUR".parse().unwrap()], Period::Last30Days);
        let view = filter_dataset(&dataset, &selection);

        // max date minus 30 days, inclusive boundary.
        let start = dataset.max_date().unwrap() - Duration::days(30);
        assert_eq!(view.start_date(), Some(start));
        assert_eq!(view.len(), 31);
        assert!(view.points().iter().all(|p| p.date() >= start));
    }

    #[test]
    fn test_full_range_keeps_everything() {
        let dataset = dataset_over_days(45);
        let selection = FilterSelection::new(vec!["USD/EUR".parse().unwrap()], Period::LastYear);
        let view = filter_dataset(&dataset, &selection);
        assert_eq!(view.len(), 45);
    }

    #[test]
    fn test_unselected_pairs_dropped() {
        let dataset = dataset_over_days(10);
        let selection = FilterSelection::new(vec!["USD/JPY".parse().unwrap()], Period::LastYear);
        let view = filter_dataset(&dataset, &selection);
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_pair_selection_yields_empty_view() {
        let dataset = dataset_over_days(10);
        let selection = FilterSelection::new(Vec::new(), Period::Last30Days);
        let view = filter_dataset(&dataset, &selection);
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = dataset_over_days(90);
        let selection =
            FilterSelection::new(vec!["USD/EUR".parse().unwrap()], Period::Last30Days);

        let once = filter_dataset(&dataset, &selection);
        let refiltered = filter_dataset(
            &RateDataset::from_points(once.points().to_vec()),
            &selection,
        );
        assert_eq!(once.points(), refiltered.points());
    }
}
