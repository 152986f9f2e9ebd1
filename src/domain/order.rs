//! Resting order entities and order classification enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OrderSide represents the direction of an order (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// OrderSideBuy indicates a buy order.
    Buy,
    /// OrderSideSell indicates a sell order.
    Sell,
}

impl OrderSide {
    /// Returns the side of the resting orders a taker on this side consumes.
    pub fn opposing(self) -> OrderSide {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

/// OrderType represents the type of order execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// OrderTypeLimit is a limit order that executes at the specified price or better.
    Limit,
    /// OrderTypeMarket is a market order that executes immediately at the best available price.
    Market,
}

/// Order is an immutable snapshot of a resting order-book entry.
///
/// `size` and `filled` are denominated in the base asset and drive the
/// matcher. The raw maker/taker amounts keep each book side's own
/// denomination (sell-side orders make base, buy-side orders make quote)
/// and drive the quote-amount aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Side indicates which book this order rests on.
    pub side: OrderSide,
    /// Size is the total base-asset amount of the order, in raw units.
    pub size: Decimal,
    /// Filled is the base-asset amount already taken from this order.
    pub filled: Decimal,
    /// MakerAssetAmount is the raw amount the maker escrowed.
    pub maker_asset_amount: Decimal,
    /// TakerAssetAmount is the raw amount the maker asks in return.
    pub taker_asset_amount: Decimal,
    /// TakerFee is the fee charged to the taker, in raw fee-token units.
    pub taker_fee: Decimal,
}

impl Order {
    /// Returns the base-asset amount still available to fill.
    pub fn available_amount(&self) -> Decimal {
        self.size - self.filled
    }

    /// Returns the quote amount implied by applying this order's raw
    /// exchange rate to a base-asset fill amount.
    ///
    /// The rate direction depends on the taker's side: a buy consumes
    /// sell-side orders (base is their maker asset), a sell consumes
    /// buy-side orders (base is their taker asset). Swapping the two
    /// inverts cost and proceeds.
    pub fn quote_amount_for_fill(&self, taker_side: OrderSide, fill_amount: Decimal) -> Decimal {
        let rate = match taker_side {
            OrderSide::Buy => self.taker_asset_amount.checked_div(self.maker_asset_amount),
            OrderSide::Sell => self.maker_asset_amount.checked_div(self.taker_asset_amount),
        };
        fill_amount * rate.unwrap_or(Decimal::ZERO)
    }
}
