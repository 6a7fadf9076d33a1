//! Items

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to item construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The item price was zero or negative.
    #[error("item price must be greater than zero")]
    NonPositivePrice,
}

/// Catalog category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A processor.
    Processor,

    /// A mouse.
    Mouse,

    /// A keyboard.
    Keyboard,

    /// A motherboard.
    Motherboard,
}

/// A priced catalog item, as submitted within an order.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'a> {
    category: Category,
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> Item<'a> {
    /// Creates a new item with the given category, display name and price.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NonPositivePrice`] unless the price is strictly positive.
    pub fn new(
        category: Category,
        name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Result<Self, ItemError> {
        if price.to_minor_units() <= 0 {
            return Err(ItemError::NonPositivePrice);
        }

        Ok(Self {
            category,
            name: name.into(),
            price,
        })
    }

    /// Returns the category of the item.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the item.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

/// Returns the cheapest price among items of the given category.
pub fn cheapest_price_of<'a>(items: &[Item<'a>], category: Category) -> Option<Money<'a, Currency>> {
    items
        .iter()
        .filter(|item| item.category() == category)
        .min_by_key(|item| item.price().to_minor_units())
        .map(|item| *item.price())
}

/// Counts the items of the given category.
#[must_use]
pub fn count_of(items: &[Item<'_>], category: Category) -> usize {
    items
        .iter()
        .filter(|item| item.category() == category)
        .count()
}
