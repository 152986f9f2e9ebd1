//! Core business entities for the order-sizing engine.

mod order;
mod orderbook;
mod pair;
mod request;

pub use order::{Order, OrderSide, OrderType};
pub use orderbook::OrderBook;
pub use pair::{CurrencyPair, PairConfig};
pub use request::TradeRequest;
