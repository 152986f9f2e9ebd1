//! Order-sizing and cost-computation core for a DEX trading frontend.
//!
//! Given a desired trade size, side, and order type, this crate
//! computes the exact fee, quote-token cost, and (for market orders)
//! the volume-weighted fill price by walking a live order book. All
//! monetary arithmetic uses arbitrary-precision decimals; network I/O
//! stays behind the [`relayer::FeeService`] collaborator trait.

pub mod config;
pub mod details;
pub mod domain;
pub mod matching;
pub mod relayer;
pub mod tokens;

pub use details::{DetailsError, OrderDetails};
pub use domain::{CurrencyPair, Order, OrderBook, OrderSide, OrderType, TradeRequest};
pub use matching::{Fill, FillResult, build_market_fill, sum_fillable_quote_amount};
pub use relayer::{FeeQuote, FeeService, FeeServiceError};
pub use tokens::{KnownTokens, Token};
