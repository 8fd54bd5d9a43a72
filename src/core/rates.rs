use crate::core::currency::CurrencyPair;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One observed exchange rate: a (date, pair) cell of the dataset.
///
/// Rate points are immutable once generated. The analytics engine
/// operates on collections of rate points to compute filtered views,
/// summary metrics and risk classifications.
///
/// # Examples
///
/// ```
/// use fx_dashboard::core::rates::RatePoint;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let point = RatePoint::new(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     "USD/EUR".parse().unwrap(),
///     dec!(0.8512),
///     2_400_000,
/// );
/// assert_eq!(point.rate(), dec!(0.8512));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Observation date.
    date: NaiveDate,
    /// The currency pair this rate belongs to.
    pair: CurrencyPair,
    /// Exchange rate, quoted units per base unit. Must be positive.
    rate: Decimal,
    /// Trading volume for the day.
    volume: u64,
}

impl RatePoint {
    /// Create a new rate point.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn new(date: NaiveDate, pair: CurrencyPair, rate: Decimal, volume: u64) -> Self {
        assert!(
            rate > Decimal::ZERO,
            "Exchange rate must be positive, got {} for {}",
            rate,
            pair
        );
        Self {
            date,
            pair,
            rate,
            volume,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }
}

/// A generated table of rate points, ordered by date.
///
/// The dataset is generated once per session and treated as read-only
/// afterwards; every analytics call takes it by reference and builds
/// fresh outputs. The `id` identifies one generation run, so cached
/// datasets can be told apart in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateDataset {
    id: Uuid,
    points: Vec<RatePoint>,
}

impl RateDataset {
    /// Build a dataset from a collection of points, ordering them by date.
    ///
    /// Points on the same date keep their relative order.
    pub fn from_points(mut points: Vec<RatePoint>) -> Self {
        points.sort_by_key(|p| p.date());
        Self {
            id: Uuid::new_v4(),
            points,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest observation date, if the dataset is non-empty.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date())
    }

    /// Latest observation date, if the dataset is non-empty.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date())
    }

    /// All unique pairs in this dataset, sorted by identifier.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        let mut pairs: Vec<CurrencyPair> = self.points.iter().map(|p| p.pair().clone()).collect();
        pairs.sort();
        pairs.dedup();
        pairs
    }
}

impl FromIterator<RatePoint> for RateDataset {
    fn from_iter<T: IntoIterator<Item = RatePoint>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn point(d: u32, pair: &str, rate: Decimal) -> RatePoint {
        RatePoint::new(date(d), pair.parse().unwrap(), rate, 1_000_000)
    }

    #[test]
    fn test_point_creation() {
        let p = point(1, "USD/EUR", dec!(0.85));
        assert_eq!(p.date(), date(1));
        assert_eq!(p.pair().to_string(), "USD/EUR");
        assert_eq!(p.volume(), 1_000_000);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_point_rejects_zero_rate() {
        point(1, "USD/EUR", Decimal::ZERO);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_point_rejects_negative_rate() {
        point(1, "USD/EUR", dec!(-0.85));
    }

    #[test]
    fn test_dataset_orders_by_date() {
        let dataset = RateDataset::from_points(vec![
            point(3, "USD/EUR", dec!(0.86)),
            point(1, "USD/EUR", dec!(0.85)),
            point(2, "USD/EUR", dec!(0.84)),
        ]);
        assert_eq!(dataset.min_date(), Some(date(1)));
        assert_eq!(dataset.max_date(), Some(date(3)));
        let dates: Vec<NaiveDate> = dataset.points().iter().map(|p| p.date()).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
    }

    #[test]
    fn test_dataset_pairs_unique_sorted() {
        let dataset: RateDataset = vec![
            point(1, "USD/EUR", dec!(0.85)),
            point(1, "EUR/GBP", dec!(0.88)),
            point(2, "USD/EUR", dec!(0.86)),
        ]
        .into_iter()
        .collect();
        let pairs: Vec<String> = dataset.pairs().iter().map(|p| p.to_string()).collect();
        assert_eq!(pairs, vec!["EUR/GBP", "USD/EUR"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = RateDataset::from_points(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.min_date(), None);
        assert_eq!(dataset.max_date(), None);
    }
}
