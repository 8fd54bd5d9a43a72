//! Assembled dashboard output for the rendering layer.

use crate::analytics::filter::FilteredView;
use crate::analytics::risk::{risk_buckets, RiskBucketEntry, RiskBuckets};
use crate::analytics::stats::{
    basket_series, min_max_by_pair, per_pair_stats, rate_to_f64, BasketPoint, MinMaxRow,
    PairStatRow,
};
use crate::analytics::summary::{summary_metrics, SummaryMetrics};
use crate::analytics::AnalyticsError;
use crate::core::currency::CurrencyPair;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One (date, rate) sample of a trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub rate: Decimal,
}

/// The trend line of one pair within the filtered window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSeries {
    pub pair: CurrencyPair,
    pub points: Vec<TrendPoint>,
}

/// A statistics table row rendered as display strings: rates to
/// 4 decimal places, volatility to 3, plus the risk-tier label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairStatDisplay {
    pub pair: String,
    pub current_rate: String,
    pub peak_rate: String,
    pub lowest_rate: String,
    pub average_rate: String,
    pub volatility: String,
    pub risk_level: String,
}

/// Everything the rendering layer needs for one filter interaction.
///
/// Built in a single pass over a non-empty filtered view; an empty
/// view yields [`AnalyticsError::EmptySelection`] instead and nothing
/// downstream is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub summary: SummaryMetrics,
    /// Line-chart series, one per selected pair with data, in
    /// selection order.
    pub trend_series: Vec<PairSeries>,
    /// Bar-chart rows, ascending by pair identifier.
    pub min_max: Vec<MinMaxRow>,
    /// Area-chart series, ascending by date.
    pub basket: Vec<BasketPoint>,
    /// Statistics table rows, in selection order.
    pub pair_stats: Vec<PairStatRow>,
    pub risk_buckets: RiskBuckets,
}

impl DashboardReport {
    /// Run the full analytics pass over a filtered view.
    pub fn build(view: &FilteredView) -> Result<Self, AnalyticsError> {
        if view.is_empty() {
            return Err(AnalyticsError::EmptySelection {
                pair_count: view.selection().pairs.len(),
                period: view.selection().period,
            });
        }

        let trend_series = view
            .selection()
            .pairs
            .iter()
            .filter_map(|pair| {
                let points: Vec<TrendPoint> = view
                    .pair_points(pair)
                    .map(|p| TrendPoint {
                        date: p.date(),
                        rate: p.rate(),
                    })
                    .collect();
                if points.is_empty() {
                    None
                } else {
                    Some(PairSeries {
                        pair: pair.clone(),
                        points,
                    })
                }
            })
            .collect();

        Ok(Self {
            summary: summary_metrics(view),
            trend_series,
            min_max: min_max_by_pair(view),
            basket: basket_series(view),
            pair_stats: per_pair_stats(view),
            risk_buckets: risk_buckets(view),
        })
    }

    /// The statistics table as display strings.
    pub fn table_rows(&self) -> Vec<PairStatDisplay> {
        self.pair_stats
            .iter()
            .map(|row| PairStatDisplay {
                pair: row.pair.to_string(),
                current_rate: format_rate(row.current_rate),
                peak_rate: format_rate(row.peak_rate),
                lowest_rate: format_rate(row.lowest_rate),
                average_rate: format!("{:.4}", row.average_rate),
                volatility: format!("{:.3}", row.volatility),
                risk_level: row.risk_level.to_string(),
            })
            .collect()
    }
}

fn format_rate(rate: Decimal) -> String {
    format!("{:.4}", rate_to_f64(rate))
}

fn format_bucket(entries: &[RiskBucketEntry]) -> String {
    if entries.is_empty() {
        return "(no pairs in this tier)".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{} (σ {:.3})", e.pair, e.volatility))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Dashboard Summary ===")?;
        writeln!(f, "Currency Pairs: {}", self.summary.pair_count)?;
        writeln!(f, "Average Rate:   {:.3}", self.summary.average_rate)?;
        writeln!(f, "Total Volume:   {:.1}M", self.summary.total_volume_millions)?;
        writeln!(f, "Risk Level:     {}", self.summary.risk_level)?;

        writeln!(f, "\n--- Peak vs Lowest Rates ---")?;
        for row in &self.min_max {
            writeln!(
                f,
                "  {:<10} low {}  peak {}",
                row.pair.to_string(),
                format_rate(row.min_rate),
                format_rate(row.max_rate)
            )?;
        }

        if let (Some(first), Some(last)) = (self.basket.first(), self.basket.last()) {
            writeln!(f, "\n--- Currency Basket ---")?;
            writeln!(
                f,
                "  {} points from {} to {}, latest {:.4}",
                self.basket.len(),
                first.date,
                last.date,
                last.basket_value
            )?;
        }

        writeln!(f, "\n--- Pair Statistics ---")?;
        for row in self.table_rows() {
            writeln!(
                f,
                "  {:<10} current {}  peak {}  low {}  avg {}  vol {}  [{}]",
                row.pair,
                row.current_rate,
                row.peak_rate,
                row.lowest_rate,
                row.average_rate,
                row.volatility,
                row.risk_level
            )?;
        }

        writeln!(f, "\n--- Risk Buckets ---")?;
        writeln!(f, "  Low:    {}", format_bucket(&self.risk_buckets.low))?;
        writeln!(f, "  Medium: {}", format_bucket(&self.risk_buckets.medium))?;
        writeln!(f, "  High:   {}", format_bucket(&self.risk_buckets.high))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::filter::{filter_dataset, FilterSelection, Period};
    use crate::core::rates::{RateDataset, RatePoint};
    use rust_decimal_macros::dec;

    fn point(d: u32, pair: &str, rate: Decimal) -> RatePoint {
        RatePoint::new(
            NaiveDate::from_ymd_opt(2023, 6, d).unwrap(),
            pair.parse().unwrap(),
            rate,
            2_000_000,
        )
    }

    fn sample_view() -> FilteredView {
        let dataset = RateDataset::from_points(vec![
            point(1, "USD/EUR", dec!(0.85)),
            point(2, "USD/EUR", dec!(0.87)),
            point(1, "USD/JPY", dec!(110.0)),
            point(2, "USD/JPY", dec!(112.5)),
        ]);
        let selection = FilterSelection::new(
            vec!["USD/EUR".parse().unwrap(), "USD/JPY".parse().unwrap()],
            Period::LastYear,
        );
        filter_dataset(&dataset, &selection)
    }

    #[test]
    fn test_empty_view_is_rejected() {
        let dataset = RateDataset::from_points(Vec::new());
        let selection = FilterSelection::default();
        let view = filter_dataset(&dataset, &selection);

        let err = DashboardReport::build(&view).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::EmptySelection { pair_count: 3, .. }
        ));
    }

    #[test]
    fn test_trend_series_in_selection_order() {
        let report = DashboardReport::build(&sample_view()).unwrap();
        assert_eq!(report.trend_series.len(), 2);
        assert_eq!(report.trend_series[0].pair.to_string(), "USD/EUR");
        assert_eq!(report.trend_series[0].points.len(), 2);
        assert_eq!(report.trend_series[1].pair.to_string(), "USD/JPY");
    }

    #[test]
    fn test_table_rows_formatting() {
        let report = DashboardReport::build(&sample_view()).unwrap();
        let rows = report.table_rows();
        assert_eq!(rows[0].pair, "USD/EUR");
        assert_eq!(rows[0].current_rate, "0.8700");
        assert_eq!(rows[0].peak_rate, "0.8700");
        assert_eq!(rows[0].lowest_rate, "0.8500");
        assert_eq!(rows[0].average_rate, "0.8600");
        // Volatility rendered to three decimals.
        assert_eq!(rows[0].volatility.split('.').nth(1).map(str::len), Some(3));
        assert_eq!(rows[0].risk_level, "Low");
    }

    #[test]
    fn test_display_mentions_every_section() {
        let report = DashboardReport::build(&sample_view()).unwrap();
        let text = report.to_string();
        assert!(text.contains("Dashboard Summary"));
        assert!(text.contains("Peak vs Lowest Rates"));
        assert!(text.contains("Currency Basket"));
        assert!(text.contains("Pair Statistics"));
        assert!(text.contains("Risk Buckets"));
        assert!(text.contains("(no pairs in this tier)"));
    }

    #[test]
    fn test_report_serializes() {
        let report = DashboardReport::build(&sample_view()).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("summary").is_some());
        assert!(parsed.get("trend_series").is_some());
        assert!(parsed.get("risk_buckets").is_some());
    }
}
