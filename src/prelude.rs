//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::DiscountError,
    items::{Category, Item, ItemError},
    ledger::{GiftLedger, HAPPY_HOUR_END, HAPPY_HOUR_START, MAX_GIFTS_PER_DAY},
    orders::{Order, OrderError},
    pricing::{Checkout, MAX_ORDER_ITEMS, PricingError},
    promotions::{Adjustment, Promotion, PromotionError},
    random::{CoinFlip, MockCoinFlip, ThreadCoin},
    receipt::Receipt,
    users::User,
};
