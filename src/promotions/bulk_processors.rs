//! Bulk Processors
//!
//! Orders carrying more than five processors get half the price of the cheapest processor taken
//! off the total. Only one processor's discount, however many exceed the threshold.

use decimal_percentage::Percentage;
use rusty_money::Money;
use tracing::debug;

use crate::{
    discounts::percent_of_minor,
    items::{Category, cheapest_price_of, count_of},
    orders::Order,
    promotions::{Pipeline, Promotion, PromotionError},
};

/// Orders must carry strictly more than this many processors to qualify.
const QUALIFYING_COUNT: usize = 5;

pub(crate) fn apply<'a>(
    order: &Order<'a>,
    pipeline: &mut Pipeline<'a>,
) -> Result<(), PromotionError> {
    if count_of(order.items(), Category::Processor) <= QUALIFYING_COUNT {
        return Ok(());
    }

    // The count check guarantees at least one processor is present.
    let Some(cheapest) = cheapest_price_of(order.items(), Category::Processor) else {
        return Ok(());
    };

    let half = percent_of_minor(&Percentage::from(0.5), cheapest.to_minor_units())?;
    let amount = Money::from_minor(half, cheapest.currency());

    debug!(%amount, "bulk processor discount applied");

    pipeline.discount(Promotion::BulkProcessors, amount)
}
