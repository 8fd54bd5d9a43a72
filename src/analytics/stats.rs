//! Per-pair descriptive statistics over a filtered view.

use crate::analytics::filter::FilteredView;
use crate::analytics::risk::{classify_risk, RiskTier};
use crate::core::currency::CurrencyPair;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution};
use std::collections::BTreeMap;

pub(crate) fn rate_to_f64(rate: Decimal) -> f64 {
    rate.to_f64().unwrap_or(0.0)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    Data::new(values.to_vec()).mean().unwrap_or(0.0)
}

/// Sample standard deviation; defined as 0.0 for fewer than two
/// observations so no NaN ever reaches an output row.
pub(crate) fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    Data::new(values.to_vec()).std_dev().unwrap_or(0.0)
}

/// Rates of one pair within the view, in date order.
pub(crate) fn pair_rates(view: &FilteredView, pair: &CurrencyPair) -> Vec<f64> {
    view.pair_points(pair)
        .map(|p| rate_to_f64(p.rate()))
        .collect()
}

/// Rate extremes for one pair within the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxRow {
    pub pair: CurrencyPair,
    pub min_rate: Decimal,
    pub max_rate: Decimal,
}

/// One point of the equal-weighted basket series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketPoint {
    pub date: NaiveDate,
    /// Mean rate across all pairs with data on this date.
    pub basket_value: f64,
}

/// Detailed statistics for one selected pair within the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairStatRow {
    pub pair: CurrencyPair,
    /// Rate of the latest observation in the filtered window.
    pub current_rate: Decimal,
    pub peak_rate: Decimal,
    pub lowest_rate: Decimal,
    pub average_rate: f64,
    /// Sample standard deviation of the pair's rates.
    pub volatility: f64,
    pub risk_level: RiskTier,
}

/// Min/max rate per pair present in the view, one row per pair,
/// ordered ascending by pair identifier.
pub fn min_max_by_pair(view: &FilteredView) -> Vec<MinMaxRow> {
    let mut extremes: BTreeMap<CurrencyPair, (Decimal, Decimal)> = BTreeMap::new();
    for p in view.points() {
        let entry = extremes
            .entry(p.pair().clone())
            .or_insert((p.rate(), p.rate()));
        entry.0 = entry.0.min(p.rate());
        entry.1 = entry.1.max(p.rate());
    }
    extremes
        .into_iter()
        .map(|(pair, (min_rate, max_rate))| MinMaxRow {
            pair,
            min_rate,
            max_rate,
        })
        .collect()
}

/// Equal-weighted basket value per date, ascending by date.
///
/// Each value is the unweighted mean of the rates present on that
/// date; a date missing some pairs still produces a value over the
/// pairs that have data.
pub fn basket_series(view: &FilteredView) -> Vec<BasketPoint> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for p in view.points() {
        by_date
            .entry(p.date())
            .or_default()
            .push(rate_to_f64(p.rate()));
    }
    by_date
        .into_iter()
        .map(|(date, rates)| BasketPoint {
            date,
            basket_value: mean(&rates),
        })
        .collect()
}

/// Detailed statistics for each selected pair, in selection order.
///
/// Pairs with no rows in the view are silently skipped.
pub fn per_pair_stats(view: &FilteredView) -> Vec<PairStatRow> {
    let mut rows = Vec::new();
    for pair in &view.selection().pairs {
        let points: Vec<_> = view.pair_points(pair).collect();
        let latest = match points.last() {
            Some(p) => *p,
            None => continue,
        };

        let rates: Vec<f64> = points.iter().map(|p| rate_to_f64(p.rate())).collect();
        let peak_rate = points
            .iter()
            .map(|p| p.rate())
            .max()
            .unwrap_or(latest.rate());
        let lowest_rate = points
            .iter()
            .map(|p| p.rate())
            .min()
            .unwrap_or(latest.rate());
        let volatility = sample_std_dev(&rates);

        rows.push(PairStatRow {
            pair: pair.clone(),
            current_rate: latest.rate(),
            peak_rate,
            lowest_rate,
            average_rate: mean(&rates),
            volatility,
            risk_level: classify_risk(volatility),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::filter::{filter_dataset, FilterSelection, Period};
    use crate::core::rates::{RateDataset, RatePoint};
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
    }

    fn point(d: u32, pair: &str, rate: Decimal) -> RatePoint {
        RatePoint::new(date(d), pair.parse().unwrap(), rate, 2_000_000)
    }

    fn view_of(points: Vec<RatePoint>, pairs: &[&str]) -> FilteredView {
        let dataset = RateDataset::from_points(points);
        let selection = FilterSelection::new(
            pairs.iter().map(|s| s.parse().unwrap()).collect(),
            Period::LastYear,
        );
        filter_dataset(&dataset, &selection)
    }

    #[test]
    fn test_helpers_on_degenerate_input() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[1.5]), 0.0);
    }

    #[test]
    fn test_min_max_rows_sorted_by_pair() {
        let view = view_of(
            vec![
                point(1, "USD/EUR", dec!(0.84)),
                point(2, "USD/EUR", dec!(0.86)),
                point(1, "EUR/GBP", dec!(0.88)),
                point(2, "EUR/GBP", dec!(0.87)),
            ],
            &["USD/EUR", "EUR/GBP"],
        );

        let rows = min_max_by_pair(&view);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pair.to_string(), "EUR/GBP");
        assert_eq!(rows[0].min_rate, dec!(0.87));
        assert_eq!(rows[0].max_rate, dec!(0.88));
        assert_eq!(rows[1].pair.to_string(), "USD/EUR");
        assert_eq!(rows[1].min_rate, dec!(0.84));
        assert_eq!(rows[1].max_rate, dec!(0.86));
    }

    #[test]
    fn test_basket_averages_pairs_per_date() {
        let view = view_of(
            vec![
                point(1, "USD/EUR", dec!(0.85)),
                point(1, "USD/JPY", dec!(110.0)),
                point(2, "USD/EUR", dec!(0.86)),
            ],
            &["USD/EUR", "USD/JPY"],
        );

        let basket = basket_series(&view);
        assert_eq!(basket.len(), 2);
        assert_eq!(basket[0].date, date(1));
        assert_relative_eq!(basket[0].basket_value, 55.425, max_relative = 1e-12);
        // Day 2 only has USD/EUR data.
        assert_relative_eq!(basket[1].basket_value, 0.86, max_relative = 1e-12);
    }

    #[test]
    fn test_basket_single_pair_equals_rates() {
        let view = view_of(
            vec![point(1, "USD/EUR", dec!(0.85)), point(2, "USD/EUR", dec!(0.87))],
            &["USD/EUR"],
        );
        let basket = basket_series(&view);
        assert_relative_eq!(basket[0].basket_value, 0.85, max_relative = 1e-12);
        assert_relative_eq!(basket[1].basket_value, 0.87, max_relative = 1e-12);
    }

    #[test]
    fn test_pair_stats_selection_order_and_latest() {
        let view = view_of(
            vec![
                point(1, "USD/EUR", dec!(0.84)),
                point(2, "USD/EUR", dec!(0.90)),
                point(3, "USD/EUR", dec!(0.86)),
                point(1, "EUR/GBP", dec!(0.88)),
            ],
            &["EUR/GBP", "USD/EUR"],
        );

        let rows = per_pair_stats(&view);
        assert_eq!(rows.len(), 2);
        // Selection order, not sorted order.
        assert_eq!(rows[0].pair.to_string(), "EUR/GBP");
        assert_eq!(rows[1].pair.to_string(), "USD/EUR");

        let usd_eur = &rows[1];
        assert_eq!(usd_eur.current_rate, dec!(0.86));
        assert_eq!(usd_eur.peak_rate, dec!(0.90));
        assert_eq!(usd_eur.lowest_rate, dec!(0.84));
        assert_relative_eq!(usd_eur.average_rate, 0.8666666666666667, max_relative = 1e-12);
    }

    #[test]
    fn test_pair_without_rows_skipped() {
        let view = view_of(
            vec![point(1, "USD/EUR", dec!(0.85))],
            &["USD/EUR", "USD/JPY"],
        );
        let rows = per_pair_stats(&view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pair.to_string(), "USD/EUR");
    }

    #[test]
    fn test_constant_series_has_zero_volatility() {
        let view = view_of(
            vec![
                point(1, "USD/EUR", dec!(0.85)),
                point(2, "USD/EUR", dec!(0.85)),
                point(3, "USD/EUR", dec!(0.85)),
            ],
            &["USD/EUR"],
        );
        let rows = per_pair_stats(&view);
        assert_eq!(rows[0].volatility, 0.0);
        assert_eq!(rows[0].risk_level, RiskTier::Low);
    }
}
