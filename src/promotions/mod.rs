//! Promotions
//!
//! The promotional rules applied to an order. The rules run as a fixed sequence of pure steps
//! over a running total, so their ordering and tie-breaks stay auditable: bulk processors, then
//! mouse overstock, then the combo gift, then the volume discount, then the small-order fee.

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{discounts::DiscountError, orders::Order};

pub mod bulk_processors;
pub mod combo_gift;
pub mod mouse_overstock;
pub mod small_order;
pub mod volume_discount;

/// The promotional rules a receipt can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// Half the cheapest processor off, for orders with more than five processors.
    BulkProcessors,

    /// The cheapest mouse free, for orders with more than ten mice.
    MouseOverstock,

    /// One item of a matched mouse/keyboard set free.
    ComboGift,

    /// Ten percent off totals over the volume threshold.
    VolumeDiscount,

    /// Flat commission added to totals under the small-order threshold.
    SmallOrderFee,

    /// Happy-hour order on the house for an underage user.
    HappyHourGift,
}

/// A single signed change a promotion made to the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment<'a> {
    /// The promotion that produced this adjustment.
    pub promotion: Promotion,

    /// Signed amount added to the running total; negative for discounts and gifts.
    pub amount: Money<'a, Currency>,
}

/// Errors raised while applying the promotion pipeline.
#[derive(Debug, Error)]
pub enum PromotionError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Wrapped percentage conversion error.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Running state threaded through the pipeline: the total so far, the price gifted by the mouse
/// overstock rule (consulted by the combo gift tie-break), and the adjustment log.
#[derive(Debug)]
pub(crate) struct Pipeline<'a> {
    total: Money<'a, Currency>,
    gifted_mouse: Option<Money<'a, Currency>>,
    adjustments: SmallVec<[Adjustment<'a>; 4]>,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(subtotal: Money<'a, Currency>) -> Self {
        Self {
            total: subtotal,
            gifted_mouse: None,
            adjustments: SmallVec::new(),
        }
    }

    /// The running total after every step applied so far.
    pub(crate) fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The price subtracted by the mouse overstock rule, if it applied.
    pub(crate) fn gifted_mouse(&self) -> Option<Money<'a, Currency>> {
        self.gifted_mouse
    }

    pub(crate) fn record_gifted_mouse(&mut self, price: Money<'a, Currency>) {
        self.gifted_mouse = Some(price);
    }

    /// Subtract `amount` from the running total on behalf of `promotion`.
    pub(crate) fn discount(
        &mut self,
        promotion: Promotion,
        amount: Money<'a, Currency>,
    ) -> Result<(), PromotionError> {
        self.total = self.total.sub(amount)?;
        self.adjustments.push(Adjustment {
            promotion,
            amount: Money::from_minor(0, amount.currency()).sub(amount)?,
        });

        Ok(())
    }

    /// Add `amount` to the running total on behalf of `promotion`.
    pub(crate) fn surcharge(
        &mut self,
        promotion: Promotion,
        amount: Money<'a, Currency>,
    ) -> Result<(), PromotionError> {
        self.total = self.total.add(amount)?;
        self.adjustments.push(Adjustment { promotion, amount });

        Ok(())
    }

    pub(crate) fn into_parts(self) -> (Money<'a, Currency>, SmallVec<[Adjustment<'a>; 4]>) {
        (self.total, self.adjustments)
    }
}

/// Applies every promotion rule to the order, in pipeline order.
pub(crate) fn apply<'a>(
    order: &Order<'a>,
    subtotal: Money<'a, Currency>,
) -> Result<Pipeline<'a>, PromotionError> {
    let mut pipeline = Pipeline::new(subtotal);

    bulk_processors::apply(order, &mut pipeline)?;
    mouse_overstock::apply(order, &mut pipeline)?;
    combo_gift::apply(order, &mut pipeline)?;
    volume_discount::apply(&mut pipeline)?;
    small_order::apply(&mut pipeline)?;

    Ok(pipeline)
}
