//! Token metadata, the known-tokens registry, and unit conversion.

mod registry;
pub mod units;

pub use registry::{KnownTokens, RegistryError};
pub use units::UnitsError;

use serde::{Deserialize, Serialize};

/// Token describes an ERC20 token known to the application.
///
/// Immutable once loaded into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Symbol is the lowercase ticker (e.g., "zrx", "weth").
    pub symbol: String,
    /// Name is the human-readable token name.
    pub name: String,
    /// Decimals is the on-chain decimal exponent (e.g., 18).
    pub decimals: u32,
    /// DisplayDecimals is the number of fractional digits shown in the UI.
    pub display_decimals: u32,
}

impl Token {
    /// Returns the symbol formatted for display.
    pub fn display_symbol(&self) -> String {
        format_token_symbol(&self.symbol)
    }
}

/// Formats a token symbol for display.
///
/// Wrapped ether keeps its conventional "wETH" casing; every other
/// symbol is uppercased.
pub fn format_token_symbol(symbol: &str) -> String {
    if symbol.eq_ignore_ascii_case("weth") {
        "wETH".to_string()
    } else {
        symbol.to_uppercase()
    }
}
