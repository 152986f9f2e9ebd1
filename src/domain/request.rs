//! Ephemeral trade-entry parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyPair, OrderSide, OrderType};

/// TradeRequest captures the trade-entry parameters at one point in time.
///
/// A new value is created per keystroke or selection change and fully
/// replaces the prior one; the presenter compares consecutive requests
/// field by field to decide whether a recompute is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    /// Desired base-token amount, in raw units.
    pub amount: Decimal,
    /// Limit price in quote display units per base unit; None for market orders.
    pub price: Option<Decimal>,
    /// Side of the trade.
    pub side: OrderSide,
    /// Market or limit execution.
    pub order_type: OrderType,
    /// The market this trade targets.
    pub pair: CurrencyPair,
}
