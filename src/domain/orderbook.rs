//! Order book snapshot supplied by an external source.

use serde::{Deserialize, Serialize};

use super::{Order, OrderSide};

/// OrderBook holds the open resting orders for one currency pair.
///
/// Both sides are already sorted best price first by the supplying
/// source; this crate never re-sorts them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    /// Open buy-side resting orders, best price first.
    pub open_buy_orders: Vec<Order>,
    /// Open sell-side resting orders, best price first.
    pub open_sell_orders: Vec<Order>,
}

impl OrderBook {
    /// Returns the best resting buy order, if any.
    pub fn best_buy(&self) -> Option<&Order> {
        self.open_buy_orders.first()
    }

    /// Returns the best resting sell order, if any.
    pub fn best_sell(&self) -> Option<&Order> {
        self.open_sell_orders.first()
    }

    /// Returns the resting orders a taker on the given side consumes.
    pub fn opposing_orders(&self, taker_side: OrderSide) -> &[Order] {
        match taker_side {
            OrderSide::Buy => &self.open_sell_orders,
            OrderSide::Sell => &self.open_buy_orders,
        }
    }
}
