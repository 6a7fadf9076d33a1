//! Orders

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::items::Item;

/// Errors related to order construction.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An item's currency differs from the order currency (index, item currency, order currency).
    #[error("item {0} has currency {1}, but the order is in {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// An ordered collection of items submitted together as one purchase.
///
/// Every item shares the order currency; emptiness and size bounds are checked by the pricing
/// engine, not here.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    items: Vec<Item<'a>>,
    currency: &'static Currency,
}

impl<'a> Order<'a> {
    /// Creates an empty order in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Order {
            items: Vec::new(),
            currency,
        }
    }

    /// Creates an order with the given items.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError::CurrencyMismatch`] if any item's currency differs from the order
    /// currency.
    pub fn with_items(
        items: impl Into<Vec<Item<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, OrderError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.price().currency();

            if item_currency == currency {
                Ok(())
            } else {
                Err(OrderError::CurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Order { items, currency })
    }

    /// Appends an item to the order.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError::CurrencyMismatch`] if the item's currency differs from the order
    /// currency.
    pub fn push(&mut self, item: Item<'a>) -> Result<(), OrderError> {
        let item_currency = item.price().currency();

        if item_currency != self.currency {
            return Err(OrderError::CurrencyMismatch(
                self.items.len(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.items.push(item);

        Ok(())
    }

    /// Returns the items in submission order.
    #[must_use]
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    /// Iterate over the items in the order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<'a>> {
        self.items.iter()
    }

    /// Get the number of items in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the order.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the sum of all item prices, before any promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.items
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, item| {
                acc.add(*item.price())
            })
    }
}
