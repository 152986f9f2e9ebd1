//! Relayer fee-quoting abstraction.
//!
//! The relayer itself lives outside this crate; only the interface the
//! order-details presenter depends on is defined here.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::OrderSide;

/// Fee service errors.
#[derive(Debug, Error)]
pub enum FeeServiceError {
    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// API error from the relayer.
    #[error("API error: {0}")]
    Api(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for fee service operations.
pub type Result<T> = std::result::Result<T, FeeServiceError>;

/// FeeQuote is the relayer's fee schedule for one prospective order.
///
/// Valid only for the trade request that asked for it; superseded
/// responses are discarded by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Fee charged to the maker, in raw fee-token units.
    pub maker_fee: Decimal,
    /// Fee charged to the taker, in raw fee-token units.
    pub taker_fee: Decimal,
}

/// FeeService defines the interface for relayer fee quoting.
#[async_trait]
pub trait FeeService: Send + Sync {
    /// FetchTakerAndMakerFee requests the maker and taker fees the
    /// relayer would charge for an order of the given amount, price,
    /// and side. May reject on network failure or timeout.
    async fn fetch_taker_and_maker_fee(
        &self,
        amount: Decimal,
        price: Decimal,
        side: OrderSide,
    ) -> Result<FeeQuote>;
}
