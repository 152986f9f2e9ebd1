//! Market-order matching against a resting order book.
//!
//! The matcher walks an already-sorted opposing book side and greedily
//! consumes liquidity until the target amount is covered; the
//! aggregation helpers then price the resulting fills in the quote
//! asset using each order's own exchange rate.

use rust_decimal::Decimal;

use crate::domain::{Order, OrderSide};

/// Fill is the (partial or full) consumption of one resting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// The resting order being consumed.
    pub order: Order,
    /// Base-asset amount taken from this order, in raw units.
    pub amount: Decimal,
}

/// FillResult is the outcome of matching one market order.
///
/// Recomputed on every trade-parameter change; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FillResult {
    /// The taker's side, recorded so the fills can be priced later.
    pub side: OrderSide,
    /// Consumed orders with per-order fill amounts, in book order.
    pub fills: Vec<Fill>,
    /// True if the full target amount was covered by the book.
    pub can_be_filled: bool,
}

impl FillResult {
    /// Sums the quote-asset amount across all fills.
    pub fn quote_token_amount(&self) -> Decimal {
        sum_fillable_quote_amount(self.side, &self.fills)
    }

    /// Sums the taker fees of every consumed order.
    ///
    /// An order contributes its whole taker fee even when only
    /// partially filled, matching the relayer's fee schedule.
    pub fn total_taker_fee(&self) -> Decimal {
        self.fills
            .iter()
            .fold(Decimal::ZERO, |sum, fill| sum + fill.order.taker_fee)
    }
}

/// Greedily selects resting orders to cover `target_amount`.
///
/// `orders` is the opposing book side, best price first; the given
/// ordering is authoritative and is consumed front to back. Per order
/// the fill is `min(remaining, available)` where available accounts for
/// any already-filled portion. If the book is exhausted first, the
/// partial fills are kept and `can_be_filled` is false; callers must
/// not price a partial result as if it were a full fill.
///
/// A zero target yields an empty fill list with `can_be_filled = true`.
pub fn build_market_fill(target_amount: Decimal, orders: &[Order], side: OrderSide) -> FillResult {
    let mut fills = Vec::new();
    let mut filled_amount = Decimal::ZERO;

    for order in orders {
        if filled_amount >= target_amount {
            break;
        }
        let available = order.available_amount();
        if available <= Decimal::ZERO {
            continue;
        }
        let remaining = target_amount - filled_amount;
        let amount = remaining.min(available);
        filled_amount += amount;
        fills.push(Fill {
            order: order.clone(),
            amount,
        });
    }

    FillResult {
        side,
        fills,
        can_be_filled: filled_amount == target_amount,
    }
}

/// Sums the quote-asset amount implied by the given fills.
///
/// The rate direction depends on the taker's side: buys price fills
/// with the consumed orders' taker/maker ratio, sells with their
/// maker/taker ratio. The asymmetry reflects which asset each book
/// side's makers escrow and must not be unified.
pub fn sum_fillable_quote_amount(side: OrderSide, fills: &[Fill]) -> Decimal {
    fills.iter().fold(Decimal::ZERO, |sum, fill| {
        sum + fill.order.quote_amount_for_fill(side, fill.amount)
    })
}

#[cfg(test)]
mod tests;
