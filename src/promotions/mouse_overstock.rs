//! Mouse Overstock
//!
//! Orders carrying more than ten mice get the cheapest mouse free. The gifted price is remembered
//! so the combo gift rule can avoid giving the same item away twice.

use tracing::debug;

use crate::{
    items::{Category, cheapest_price_of, count_of},
    orders::Order,
    promotions::{Pipeline, Promotion, PromotionError},
};

/// Orders must carry strictly more than this many mice to qualify.
const QUALIFYING_COUNT: usize = 10;

pub(crate) fn apply<'a>(
    order: &Order<'a>,
    pipeline: &mut Pipeline<'a>,
) -> Result<(), PromotionError> {
    if count_of(order.items(), Category::Mouse) <= QUALIFYING_COUNT {
        return Ok(());
    }

    // The count check guarantees at least one mouse is present.
    let Some(cheapest) = cheapest_price_of(order.items(), Category::Mouse) else {
        return Ok(());
    };

    pipeline.record_gifted_mouse(cheapest);

    debug!(amount = %cheapest, "mouse overstock gift applied");

    pipeline.discount(Promotion::MouseOverstock, cheapest)
}
