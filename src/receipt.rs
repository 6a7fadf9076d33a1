//! Receipt

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;

use crate::promotions::Adjustment;

/// Priced outcome of a checkout: what the order cost, and why.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    subtotal: Money<'a, Currency>,
    total: Money<'a, Currency>,
    adjustments: SmallVec<[Adjustment<'a>; 4]>,
}

impl<'a> Receipt<'a> {
    pub(crate) fn new(
        subtotal: Money<'a, Currency>,
        total: Money<'a, Currency>,
        adjustments: SmallVec<[Adjustment<'a>; 4]>,
    ) -> Self {
        Self {
            subtotal,
            total,
            adjustments,
        }
    }

    /// Total cost before any promotion was applied.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Final amount charged for the order.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The adjustments the promotion rules made, in application order.
    #[must_use]
    pub fn adjustments(&self) -> &[Adjustment<'a>] {
        &self.adjustments
    }

    /// Calculate the difference between the subtotal and the charged total.
    ///
    /// Negative when the only applied rule was the small-order commission.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }
}
