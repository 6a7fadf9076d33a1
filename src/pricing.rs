//! Pricing
//!
//! The checkout engine: validates an order's size bounds, applies the happy-hour gift
//! short-circuit, then runs the promotion pipeline over the item sum.

use std::sync::Arc;

use jiff::civil::Time;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::smallvec;
use thiserror::Error;
use tracing::debug;

use crate::{
    ledger::GiftLedger,
    orders::Order,
    promotions::{self, Adjustment, Promotion, PromotionError},
    random::{CoinFlip, ThreadCoin},
    receipt::Receipt,
    users::User,
};

/// Maximum number of items a single order may contain.
pub const MAX_ORDER_ITEMS: usize = 30;

/// Errors raised while pricing an order.
///
/// All of these are local validation failures; retrying the same input reproduces the same
/// outcome.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The order contained no items.
    #[error("order must contain at least one item")]
    EmptyOrder,

    /// The order exceeded the per-order item cap.
    #[error("order can't contain more than {MAX_ORDER_ITEMS} items, got {0}")]
    TooManyItems(usize),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Wrapped promotion pipeline error.
    #[error(transparent)]
    Promotion(#[from] PromotionError),
}

/// The pricing engine.
///
/// One checkout serves a stream of pricing calls. The gift ledger is passed in explicitly and
/// shared between every checkout pricing against the same day window; the coin-flip source is an
/// injected capability so tests can pin the draw.
#[derive(Debug)]
pub struct Checkout<C = ThreadCoin> {
    ledger: Arc<GiftLedger>,
    coin: C,
}

impl Checkout<ThreadCoin> {
    /// Creates a checkout drawing happy-hour coin flips from the thread-local RNG.
    #[must_use]
    pub fn new(ledger: Arc<GiftLedger>) -> Self {
        Self::with_coin(ledger, ThreadCoin)
    }
}

impl<C: CoinFlip> Checkout<C> {
    /// Creates a checkout with an injected coin-flip source.
    pub fn with_coin(ledger: Arc<GiftLedger>, coin: C) -> Self {
        Self { ledger, coin }
    }

    /// Returns the shared gift ledger.
    #[must_use]
    pub fn ledger(&self) -> &GiftLedger {
        &self.ledger
    }

    /// Prices the order, returning only the final charge.
    ///
    /// # Errors
    ///
    /// See [`Checkout::receipt`].
    pub fn price<'a>(
        &self,
        order: &Order<'a>,
        user: &User,
        at: Time,
    ) -> Result<Money<'a, Currency>, PricingError> {
        Ok(self.receipt(order, user, at)?.total())
    }

    /// Prices the order, returning the full receipt.
    ///
    /// Validation runs before any ledger interaction, so a rejected order never consumes a gift
    /// slot. The coin flip happens at most once, and only after the underage, window, cap and
    /// membership conditions have all passed.
    ///
    /// # Errors
    ///
    /// - [`PricingError::EmptyOrder`]: the order contained no items.
    /// - [`PricingError::TooManyItems`]: the order exceeded [`MAX_ORDER_ITEMS`] items.
    pub fn receipt<'a>(
        &self,
        order: &Order<'a>,
        user: &User,
        at: Time,
    ) -> Result<Receipt<'a>, PricingError> {
        if order.is_empty() {
            return Err(PricingError::EmptyOrder);
        }

        if order.len() > MAX_ORDER_ITEMS {
            return Err(PricingError::TooManyItems(order.len()));
        }

        let subtotal = order.subtotal()?;

        if user.is_underage()
            && GiftLedger::window_contains(at)
            && self.ledger.try_grant(user, &self.coin)
        {
            debug!(%subtotal, "happy-hour gift, order is free");

            let zero = Money::from_minor(0, order.currency());

            return Ok(Receipt::new(
                subtotal,
                zero,
                smallvec![Adjustment {
                    promotion: Promotion::HappyHourGift,
                    amount: zero.sub(subtotal)?,
                }],
            ));
        }

        let (total, adjustments) = promotions::apply(order, subtotal)?.into_parts();

        debug!(%subtotal, %total, rules = adjustments.len(), "order priced");

        Ok(Receipt::new(subtotal, total, adjustments))
    }
}
