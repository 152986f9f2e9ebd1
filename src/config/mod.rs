//! Token and market configuration.
//!
//! Uses serde_yaml to load the known-tokens registry and the list of
//! tradeable markets from a YAML file.

mod error;

pub use error::ConfigError;

use std::collections::HashSet;
use std::fs;

use serde::Deserialize;

use crate::domain::CurrencyPair;
use crate::tokens::{KnownTokens, Token};

/// Largest decimal exponent the arithmetic layer supports.
const MAX_TOKEN_DECIMALS: u32 = 28;

/// MarketConfig describes one tradeable currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Base token symbol.
    pub base: String,
    /// Quote token symbol.
    pub quote: String,
    /// Fractional digits used when displaying prices for this pair.
    pub price_precision: u32,
}

/// Root configuration: known tokens and available markets.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tokens the application knows about.
    pub tokens: Vec<Token>,
    /// Markets available for trading.
    pub markets: Vec<MarketConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the known-tokens registry from the configured tokens.
    pub fn known_tokens(&self) -> Result<KnownTokens, ConfigError> {
        KnownTokens::new(self.tokens.clone())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Returns the configured markets as currency pairs.
    pub fn currency_pairs(&self) -> Vec<CurrencyPair> {
        self.markets
            .iter()
            .map(|m| CurrencyPair::new(m.base.clone(), m.quote.clone(), m.price_precision))
            .collect()
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.is_empty() {
            return Err(ConfigError::Validation(
                "at least one token is required".into(),
            ));
        }

        let mut symbols = HashSet::new();
        for token in &self.tokens {
            if token.symbol.is_empty() {
                return Err(ConfigError::Validation("token symbol is required".into()));
            }
            if token.decimals > MAX_TOKEN_DECIMALS {
                return Err(ConfigError::Validation(format!(
                    "token {}: decimals {} exceeds the maximum of {}",
                    token.symbol, token.decimals, MAX_TOKEN_DECIMALS
                )));
            }
            if !symbols.insert(token.symbol.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate token symbol {}",
                    token.symbol
                )));
            }
        }

        for market in &self.markets {
            for symbol in [&market.base, &market.quote] {
                if !symbols.contains(&symbol.to_lowercase()) {
                    return Err(ConfigError::Validation(format!(
                        "market {}/{}: token {} is not configured",
                        market.base, market.quote, symbol
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
