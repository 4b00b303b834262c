//! Currency Pair Symbol
//!
//! Typed exchange-rate identifier in the Yahoo Finance forex format
//! (`EURUSD=X`). Parsing rejects malformed symbols up front so the rest of
//! the crate only ever sees well-formed pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix Yahoo Finance appends to forex tickers
const SYMBOL_SUFFIX: &str = "=X";

/// Length of an ISO 4217 currency code
const CODE_LEN: usize = 3;

/// A forex instrument symbol, e.g. EUR/USD quoted as `EURUSD=X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Base currency code (the first leg, e.g. "EUR" in EURUSD=X)
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote currency code (the second leg, e.g. "USD" in EURUSD=X)
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Full ticker symbol in Yahoo Finance format
    pub fn symbol(&self) -> String {
        format!("{}{}{}", self.base, self.quote, SYMBOL_SUFFIX)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, self.quote, SYMBOL_SUFFIX)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes = s
            .strip_suffix(SYMBOL_SUFFIX)
            .ok_or_else(|| PairError::MissingSuffix(s.to_string()))?;

        if codes.len() != CODE_LEN * 2 || !codes.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(PairError::MalformedCodes(s.to_string()));
        }

        let (base, quote) = codes.split_at(CODE_LEN);

        if base == quote {
            return Err(PairError::IdenticalCurrencies(s.to_string()));
        }

        Ok(Self {
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = PairError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.symbol()
    }
}

/// Symbol parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("currency pair '{0}' is missing the '=X' suffix")]
    MissingSuffix(String),
    #[error("currency pair '{0}' must be two three-letter uppercase currency codes")]
    MalformedCodes(String),
    #[error("currency pair '{0}' quotes a currency against itself")]
    IdenticalCurrencies(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_symbol() {
        let pair: CurrencyPair = "EURUSD=X".parse().unwrap();
        assert_eq!(pair.base(), "EUR");
        assert_eq!(pair.quote(), "USD");
        assert_eq!(pair.symbol(), "EURUSD=X");
        assert_eq!(pair.to_string(), "EURUSD=X");
    }

    #[test]
    fn test_missing_suffix() {
        let result = "EURUSD".parse::<CurrencyPair>();
        assert!(matches!(result, Err(PairError::MissingSuffix(_))));
    }

    #[test]
    fn test_malformed_codes() {
        assert!(matches!(
            "eurusd=X".parse::<CurrencyPair>(),
            Err(PairError::MalformedCodes(_))
        ));
        assert!(matches!(
            "EURUS=X".parse::<CurrencyPair>(),
            Err(PairError::MalformedCodes(_))
        ));
        assert!(matches!(
            "EUR1SD=X".parse::<CurrencyPair>(),
            Err(PairError::MalformedCodes(_))
        ));
    }

    #[test]
    fn test_identical_currencies() {
        let result = "USDUSD=X".parse::<CurrencyPair>();
        assert!(matches!(result, Err(PairError::IdenticalCurrencies(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let pair: CurrencyPair = "GBPUSD=X".parse().unwrap();
        let toml = toml::to_string(&std::collections::BTreeMap::from([("pair", pair.clone())]))
            .unwrap();
        assert!(toml.contains("GBPUSD=X"));

        let back: std::collections::BTreeMap<String, CurrencyPair> =
            toml::from_str(&toml).unwrap();
        assert_eq!(back["pair"], pair);
    }
}
