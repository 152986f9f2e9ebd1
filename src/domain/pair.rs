//! Tradeable market identification.

use serde::{Deserialize, Serialize};

/// PairConfig carries the display settings of a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    /// PricePrecision is the number of fractional digits used when
    /// displaying prices for this pair.
    pub price_precision: u32,
}

/// CurrencyPair identifies a tradeable market.
///
/// Immutable for the lifetime of a trade-entry session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base token symbol (the asset being bought or sold).
    pub base: String,
    /// Quote token symbol (the asset used to price and pay).
    pub quote: String,
    /// Display configuration for this pair.
    pub config: PairConfig,
}

impl CurrencyPair {
    /// Creates a new CurrencyPair.
    pub fn new(base: impl Into<String>, quote: impl Into<String>, price_precision: u32) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
            config: PairConfig { price_precision },
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
