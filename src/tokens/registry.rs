//! Known-tokens registry.

use std::collections::HashMap;

use thiserror::Error;

use super::Token;

/// Registry lookup error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("token {0} is not registered")]
    NotFound(String),
    #[error("duplicate token symbol {0}")]
    DuplicateSymbol(String),
}

/// KnownTokens holds the tokens the application can trade or pay fees in.
///
/// The registry is constructed once and passed explicitly to whatever
/// needs it; there is no process-wide singleton.
#[derive(Debug, Clone, Default)]
pub struct KnownTokens {
    tokens: HashMap<String, Token>,
}

impl KnownTokens {
    /// Builds a registry from a list of tokens.
    ///
    /// Symbols are keyed lowercase; duplicates are rejected.
    pub fn new(tokens: Vec<Token>) -> Result<Self, RegistryError> {
        let mut map = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let key = token.symbol.to_lowercase();
            if map.insert(key.clone(), token).is_some() {
                return Err(RegistryError::DuplicateSymbol(key));
            }
        }
        Ok(Self { tokens: map })
    }

    /// Looks up a token by symbol, case-insensitively.
    pub fn get_token_by_symbol(&self, symbol: &str) -> Result<&Token, RegistryError> {
        self.tokens
            .get(&symbol.to_lowercase())
            .ok_or_else(|| RegistryError::NotFound(symbol.to_string()))
    }

    /// Returns the number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
