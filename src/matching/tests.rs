//! Tests for market-order matching and quote-amount aggregation.

use super::*;
use rust_decimal::Decimal;

/// Builds a sell-side resting order of the given base size.
///
/// Maker escrows base, taker pays quote at the given price.
fn sell_order(size: i64, price: i64, taker_fee: i64) -> Order {
    Order {
        side: OrderSide::Sell,
        size: Decimal::from(size),
        filled: Decimal::ZERO,
        maker_asset_amount: Decimal::from(size),
        taker_asset_amount: Decimal::from(size * price),
        taker_fee: Decimal::from(taker_fee),
    }
}

/// Builds a buy-side resting order of the given base size.
///
/// Maker escrows quote, taker pays base at the given price.
fn buy_order(size: i64, price: i64, taker_fee: i64) -> Order {
    Order {
        side: OrderSide::Buy,
        size: Decimal::from(size),
        filled: Decimal::ZERO,
        maker_asset_amount: Decimal::from(size * price),
        taker_asset_amount: Decimal::from(size),
        taker_fee: Decimal::from(taker_fee),
    }
}

// ==================== Matcher tests ====================

#[test]
fn test_match_partial_fill_of_second_order() {
    // Orders of 5 and 5, target 7: fills must be [5, 2].
    let orders = vec![sell_order(5, 2, 1), sell_order(5, 3, 1)];
    let result = build_market_fill(Decimal::from(7), &orders, OrderSide::Buy);

    assert!(result.can_be_filled);
    assert_eq!(result.fills.len(), 2);
    assert_eq!(result.fills[0].amount, Decimal::from(5));
    assert_eq!(result.fills[1].amount, Decimal::from(2));
    assert_eq!(result.total_taker_fee(), Decimal::from(2));
}

#[test]
fn test_match_insufficient_liquidity() {
    // A single order of 3 cannot cover a target of 10.
    let orders = vec![sell_order(3, 2, 1)];
    let result = build_market_fill(Decimal::from(10), &orders, OrderSide::Buy);

    assert!(!result.can_be_filled);
    assert_eq!(result.fills.len(), 1);
    assert_eq!(result.fills[0].amount, Decimal::from(3));
}

#[test]
fn test_match_zero_target_is_trivially_fillable() {
    let orders = vec![sell_order(5, 2, 1)];
    let result = build_market_fill(Decimal::ZERO, &orders, OrderSide::Buy);

    assert!(result.can_be_filled);
    assert!(result.fills.is_empty());
}

#[test]
fn test_match_zero_target_against_empty_book() {
    let result = build_market_fill(Decimal::ZERO, &[], OrderSide::Sell);

    assert!(result.can_be_filled);
    assert!(result.fills.is_empty());
}

#[test]
fn test_match_empty_book_is_unfillable() {
    let result = build_market_fill(Decimal::from(1), &[], OrderSide::Buy);

    assert!(!result.can_be_filled);
    assert!(result.fills.is_empty());
}

#[test]
fn test_match_exact_book_total() {
    let orders = vec![sell_order(5, 2, 1), sell_order(5, 3, 1)];
    let result = build_market_fill(Decimal::from(10), &orders, OrderSide::Buy);

    assert!(result.can_be_filled);
    let total: Decimal = result.fills.iter().map(|f| f.amount).sum();
    assert_eq!(total, Decimal::from(10));
}

#[test]
fn test_match_fill_amounts_sum_to_target() {
    let orders = vec![sell_order(4, 1, 0), sell_order(6, 1, 0), sell_order(8, 1, 0)];
    for target in 1..=18i64 {
        let result = build_market_fill(Decimal::from(target), &orders, OrderSide::Buy);
        assert!(result.can_be_filled, "target {} should be fillable", target);
        let total: Decimal = result.fills.iter().map(|f| f.amount).sum();
        assert_eq!(total, Decimal::from(target));
    }
}

#[test]
fn test_match_respects_partially_filled_orders() {
    let mut order = sell_order(5, 2, 1);
    order.filled = Decimal::from(3);
    let result = build_market_fill(Decimal::from(4), &[order, sell_order(5, 3, 1)], OrderSide::Buy);

    assert!(result.can_be_filled);
    assert_eq!(result.fills[0].amount, Decimal::from(2));
    assert_eq!(result.fills[1].amount, Decimal::from(2));
}

#[test]
fn test_match_skips_fully_filled_orders() {
    let mut spent = sell_order(5, 2, 1);
    spent.filled = Decimal::from(5);
    let result = build_market_fill(Decimal::from(3), &[spent, sell_order(5, 3, 1)], OrderSide::Buy);

    assert!(result.can_be_filled);
    assert_eq!(result.fills.len(), 1);
    assert_eq!(result.fills[0].amount, Decimal::from(3));
}

#[test]
fn test_match_consumes_orders_in_given_order() {
    // The matcher trusts the external sort; a worse-priced order listed
    // first is consumed first.
    let orders = vec![sell_order(5, 9, 1), sell_order(5, 1, 1)];
    let result = build_market_fill(Decimal::from(5), &orders, OrderSide::Buy);

    assert_eq!(result.fills.len(), 1);
    assert_eq!(result.fills[0].order.taker_asset_amount, Decimal::from(45));
}

// ==================== Aggregator tests ====================

#[test]
fn test_sum_quote_amount_for_buy() {
    // Buy consumes sell-side orders: quote = fill * taker / maker.
    let orders = vec![sell_order(5, 2, 1), sell_order(5, 3, 1)];
    let result = build_market_fill(Decimal::from(7), &orders, OrderSide::Buy);

    // 5 at price 2 plus 2 at price 3.
    assert_eq!(result.quote_token_amount(), Decimal::from(16));
}

#[test]
fn test_sum_quote_amount_for_sell() {
    // Sell consumes buy-side orders: quote = fill * maker / taker.
    let orders = vec![buy_order(5, 2, 1), buy_order(5, 3, 1)];
    let result = build_market_fill(Decimal::from(7), &orders, OrderSide::Sell);

    assert_eq!(result.quote_token_amount(), Decimal::from(16));
}

#[test]
fn test_sum_quote_amount_direction_asymmetry() {
    // The same raw amounts priced from the two sides give inverse
    // rates; this is the invariant that keeps cost and proceeds apart.
    let order = sell_order(4, 2, 0);
    let fills = vec![Fill {
        order,
        amount: Decimal::from(4),
    }];

    assert_eq!(
        sum_fillable_quote_amount(OrderSide::Buy, &fills),
        Decimal::from(8)
    );
    assert_eq!(
        sum_fillable_quote_amount(OrderSide::Sell, &fills),
        Decimal::from(2)
    );
}

#[test]
fn test_sum_quote_amount_empty_fills() {
    assert_eq!(
        sum_fillable_quote_amount(OrderSide::Buy, &[]),
        Decimal::ZERO
    );
}

#[test]
fn test_total_taker_fee_counts_partial_fills_fully() {
    // A partially consumed order still contributes its whole taker fee.
    let orders = vec![sell_order(5, 2, 1), sell_order(5, 2, 1)];
    let result = build_market_fill(Decimal::from(6), &orders, OrderSide::Buy);

    assert_eq!(result.total_taker_fee(), Decimal::from(2));
}
