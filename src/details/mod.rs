//! Order-details presenter.
//!
//! Reacts to trade-parameter changes, dispatches to the market-order
//! matcher or the relayer fee service, and formats the fee, cost, and
//! median-price display values.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{OrderBook, OrderSide, OrderType, TradeRequest};
use crate::matching::build_market_fill;
use crate::relayer::FeeService;
use crate::tokens::{KnownTokens, RegistryError, UnitsError, units};

/// Rendered in place of a numeric figure that cannot be computed.
const PLACEHOLDER: &str = "---";

/// Intermediate precision for the median-price ratio.
const MEDIAN_PRICE_INTERMEDIATE_DECIMALS: u32 = 18;

/// Presenter error type.
///
/// Fee-service failures never surface here; they are absorbed at the
/// recompute boundary so a failed quote cannot blank the display.
#[derive(Debug, Error)]
pub enum DetailsError {
    #[error("token lookup failed: {0}")]
    Lookup(#[from] RegistryError),
    #[error("unit conversion failed: {0}")]
    Units(#[from] UnitsError),
}

/// Display figures for the current trade request.
#[derive(Debug, Clone)]
struct DetailsState {
    /// Fee in raw fee-token units.
    fee_amount: Decimal,
    /// Cost or proceeds in raw quote-token units.
    quote_token_amount: Decimal,
    /// False when a market order exceeds the available liquidity.
    can_be_filled: bool,
}

impl Default for DetailsState {
    fn default() -> Self {
        Self {
            fee_amount: Decimal::ZERO,
            quote_token_amount: Decimal::ZERO,
            can_be_filled: true,
        }
    }
}

/// OrderDetails computes and formats the order-entry summary figures.
///
/// Each recompute fully replaces the prior state. Recomputes are
/// sequence-numbered so that a fee response arriving after a newer
/// request has superseded it is discarded instead of overwriting the
/// newer figures.
pub struct OrderDetails {
    registry: Arc<KnownTokens>,
    fee_service: Arc<dyn FeeService>,
    /// Symbol of the token fees are denominated in (e.g., "zrx").
    fee_token_symbol: String,
    request: Mutex<Option<TradeRequest>>,
    seq: AtomicU64,
    state: Mutex<DetailsState>,
}

impl OrderDetails {
    /// Creates a new presenter.
    pub fn new(
        registry: Arc<KnownTokens>,
        fee_service: Arc<dyn FeeService>,
        fee_token_symbol: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            fee_service,
            fee_token_symbol: fee_token_symbol.into(),
            request: Mutex::new(None),
            seq: AtomicU64::new(0),
            state: Mutex::new(DetailsState::default()),
        }
    }

    /// Recomputes the display figures for a changed trade request.
    ///
    /// A request equal to the current one is skipped so repeated
    /// notifications do not trigger redundant fee calls. Each accepted
    /// request takes a fresh sequence number, which invalidates any
    /// still-in-flight fee resolution for an older request.
    pub async fn on_change(
        &self,
        request: TradeRequest,
        book: &OrderBook,
    ) -> Result<(), DetailsError> {
        {
            let mut current = self.request.lock().await;
            if current.as_ref() == Some(&request) {
                debug!("trade parameters unchanged, skipping recompute");
                return Ok(());
            }
            *current = Some(request.clone());
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        match request.order_type {
            OrderType::Limit => self.recompute_limit(seq, &request).await,
            OrderType::Market => self.recompute_market(seq, &request, book).await,
        }
    }

    /// Invalidates any in-flight recompute, e.g. when the presenting
    /// view goes away.
    pub fn close(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }

    /// Limit path: price the order directly and resolve the maker fee
    /// through the relayer.
    async fn recompute_limit(&self, seq: u64, request: &TradeRequest) -> Result<(), DetailsError> {
        let quote_token = self.registry.get_token_by_symbol(&request.pair.quote)?;
        let base_token = self.registry.get_token_by_symbol(&request.pair.base)?;

        let price = request.price.unwrap_or(Decimal::ZERO);
        let price_in_quote_base_units = units::to_base_unit_amount(price, quote_token.decimals)?;
        let base_amount_in_units = units::to_unit_amount(request.amount, base_token.decimals)?;
        let quote_token_amount = base_amount_in_units * price_in_quote_base_units;

        match self
            .fee_service
            .fetch_taker_and_maker_fee(request.amount, price, request.side)
            .await
        {
            Ok(quote) => {
                self.apply(seq, |state| {
                    state.fee_amount = quote.maker_fee;
                    state.quote_token_amount = quote_token_amount;
                    state.can_be_filled = true;
                })
                .await;
            }
            Err(e) => {
                // Keep the previous figures rather than show defaults.
                warn!(error = %e, "fee resolution failed");
            }
        }

        Ok(())
    }

    /// Market path: walk the opposing book side; fees come from the
    /// consumed orders themselves, so no network call is needed.
    async fn recompute_market(
        &self,
        seq: u64,
        request: &TradeRequest,
        book: &OrderBook,
    ) -> Result<(), DetailsError> {
        let orders = book.opposing_orders(request.side);
        let result = build_market_fill(request.amount, orders, request.side);

        let fee_amount = result.total_taker_fee();
        let quote_token_amount = result.quote_token_amount();
        let can_be_filled = result.can_be_filled;

        self.apply(seq, |state| {
            state.fee_amount = fee_amount;
            state.quote_token_amount = quote_token_amount;
            state.can_be_filled = can_be_filled;
        })
        .await;

        Ok(())
    }

    /// Writes new figures unless a newer request has taken over.
    async fn apply(&self, seq: u64, write: impl FnOnce(&mut DetailsState)) {
        let mut state = self.state.lock().await;
        if seq != self.seq.load(Ordering::SeqCst) {
            debug!(seq, "discarding superseded recompute result");
            return;
        }
        write(&mut state);
    }

    // ==================== Display values ====================

    /// Formats the fee in fee-token display units, e.g. "2.00 ZRX".
    pub async fn fee_text(&self) -> Result<String, DetailsError> {
        let fee_token = self.registry.get_token_by_symbol(&self.fee_token_symbol)?;
        let fee_amount = self.state.lock().await.fee_amount;
        let amount = units::token_amount_in_units(
            fee_amount,
            fee_token.decimals,
            Some(fee_token.display_decimals),
        )?;
        Ok(format!("{} {}", amount, fee_token.display_symbol()))
    }

    /// Formats the total cost (buy) or proceeds (sell) in quote display
    /// units, with a 2-decimal USD equivalent when a USD quote price is
    /// available. Unfillable market orders render a placeholder.
    pub async fn cost_text(&self, quote_in_usd: Option<Decimal>) -> Result<String, DetailsError> {
        let Some(request) = self.request.lock().await.clone() else {
            return Ok(PLACEHOLDER.to_string());
        };
        let state = self.state.lock().await.clone();

        if request.order_type == OrderType::Market && !state.can_be_filled {
            return Ok(PLACEHOLDER.to_string());
        }

        let quote_token = self.registry.get_token_by_symbol(&request.pair.quote)?;
        let cost = units::token_amount_in_units(
            state.quote_token_amount,
            quote_token.decimals,
            Some(quote_token.display_decimals),
        )?;
        let symbol = quote_token.display_symbol();

        match quote_in_usd {
            Some(usd) => {
                let quote_units =
                    units::to_unit_amount(state.quote_token_amount, quote_token.decimals)?;
                let usd_amount = (quote_units * usd)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                Ok(format!("{} {} ({:.2} $)", cost, symbol, usd_amount))
            }
            None => Ok(format!("{} {}", cost, symbol)),
        }
    }

    /// Formats the volume-weighted median fill price, rounded to the
    /// pair's price precision plus one digit. Renders a placeholder for
    /// unfillable market orders and for a zero trade amount.
    pub async fn median_price_text(&self) -> Result<String, DetailsError> {
        let Some(request) = self.request.lock().await.clone() else {
            return Ok(PLACEHOLDER.to_string());
        };
        let state = self.state.lock().await.clone();

        if request.order_type == OrderType::Market && !state.can_be_filled {
            return Ok(PLACEHOLDER.to_string());
        }
        if request.amount.is_zero() {
            return Ok(PLACEHOLDER.to_string());
        }

        let quote_token = self.registry.get_token_by_symbol(&request.pair.quote)?;
        let base_token = self.registry.get_token_by_symbol(&request.pair.base)?;

        let quote_units = units::to_unit_amount(state.quote_token_amount, quote_token.decimals)?
            .round_dp_with_strategy(MEDIAN_PRICE_INTERMEDIATE_DECIMALS, RoundingStrategy::ToZero);
        let base_units = units::to_unit_amount(request.amount, base_token.decimals)?
            .round_dp_with_strategy(MEDIAN_PRICE_INTERMEDIATE_DECIMALS, RoundingStrategy::ToZero);
        if base_units.is_zero() {
            return Ok(PLACEHOLDER.to_string());
        }

        let precision = request.pair.config.price_precision + 1;
        let price = (quote_units / base_units)
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
        Ok(format!(
            "{:.*} {}",
            precision as usize,
            price,
            quote_token.display_symbol()
        ))
    }

    /// Returns the cost row label: "Cost" for buys, "Total" for sells,
    /// with a "(USD)" suffix when a USD quote price is available.
    pub async fn cost_label(&self, quote_in_usd: Option<Decimal>) -> String {
        let side = self
            .request
            .lock()
            .await
            .as_ref()
            .map(|r| r.side)
            .unwrap_or(OrderSide::Buy);
        let label = match side {
            OrderSide::Sell => "Total",
            OrderSide::Buy => "Cost",
        };
        if quote_in_usd.is_some() {
            format!("{} (USD)", label)
        } else {
            label.to_string()
        }
    }

    // ==================== State accessors ====================

    /// Current fee in raw fee-token units.
    pub async fn fee_amount(&self) -> Decimal {
        self.state.lock().await.fee_amount
    }

    /// Current cost or proceeds in raw quote-token units.
    pub async fn quote_token_amount(&self) -> Decimal {
        self.state.lock().await.quote_token_amount
    }

    /// True unless the current market order exceeds available liquidity.
    pub async fn can_be_filled(&self) -> bool {
        self.state.lock().await.can_be_filled
    }
}
