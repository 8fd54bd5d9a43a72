use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 4217-style currency code.
///
/// Supports standard fiat currencies (USD, EUR, JPY, INR, etc.)
/// as well as arbitrary identifiers for experimental or synthetic
/// currencies.
///
/// # Examples
///
/// ```
/// use fx_dashboard::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let eur = CurrencyCode::new("EUR");
/// assert_ne!(usd, eur);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Error raised when a currency pair string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid currency pair '{input}': expected BASE/QUOTE")]
pub struct PairParseError {
    pub input: String,
}

/// A pair of currencies naming a base and a quote, e.g. `USD/EUR`.
///
/// The pair identifier is the display form `BASE/QUOTE`; it is also the
/// serialized form, so datasets and reports carry pairs as plain strings.
///
/// # Examples
///
/// ```
/// use fx_dashboard::core::currency::CurrencyPair;
///
/// let pair: CurrencyPair = "USD/EUR".parse().unwrap();
/// assert_eq!(pair.base().as_str(), "USD");
/// assert_eq!(pair.quote().as_str(), "EUR");
/// assert_eq!(pair.to_string(), "USD/EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    base: CurrencyCode,
    quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn quote(&self) -> &CurrencyCode {
        &self.quote
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => Ok(Self::new(
                CurrencyCode::new(base.trim()),
                CurrencyCode::new(quote.trim()),
            )),
            _ => Err(PairParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = PairParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}
