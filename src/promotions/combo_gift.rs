//! Combo Gift
//!
//! Orders with as many mice as keyboards (and at least one of each) get the cheapest of those
//! items free. When the mouse overstock rule already gave that exact price away, the second
//! cheapest pick is subtracted instead, so the same physical item is never gifted twice. Exactly
//! one subtraction, however many items tie in price.

use rusty_money::Money;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    items::{Category, count_of},
    orders::Order,
    promotions::{Pipeline, Promotion, PromotionError},
};

pub(crate) fn apply<'a>(
    order: &Order<'a>,
    pipeline: &mut Pipeline<'a>,
) -> Result<(), PromotionError> {
    let mouse_count = count_of(order.items(), Category::Mouse);

    if mouse_count == 0 || mouse_count != count_of(order.items(), Category::Keyboard) {
        return Ok(());
    }

    let mut picks: SmallVec<[i64; 10]> = order
        .items()
        .iter()
        .filter(|item| matches!(item.category(), Category::Mouse | Category::Keyboard))
        .map(|item| item.price().to_minor_units())
        .collect();
    picks.sort_unstable();

    let Some(&first) = picks.first() else {
        return Ok(());
    };

    // A mouse and a keyboard are both present, so a second pick always exists.
    let second = picks.get(1).copied().unwrap_or(first);

    let chosen = if pipeline.gifted_mouse().map(|mouse| mouse.to_minor_units()) == Some(first) {
        second
    } else {
        first
    };

    let amount = Money::from_minor(chosen, order.currency());

    debug!(%amount, "mouse/keyboard combo gift applied");

    pipeline.discount(Promotion::ComboGift, amount)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::items::Item;

    use super::*;

    fn batch<'a>(
        category: Category,
        count: i64,
        multiplier: i64,
    ) -> Result<Vec<Item<'a>>, crate::items::ItemError> {
        (1..=count)
            .map(|i| Item::new(category, "foo", Money::from_minor(i * multiplier, GBP)))
            .collect()
    }

    #[test]
    fn unequal_counts_get_no_gift() -> TestResult {
        for (mouse_count, keyboard_count) in [(1, 2), (2, 3), (3, 2), (2, 1)] {
            let mut items = batch(Category::Mouse, mouse_count, 500)?;
            items.extend(batch(Category::Keyboard, keyboard_count, 1000)?);

            let order = Order::with_items(items, GBP)?;
            let subtotal = order.subtotal()?;

            let mut pipeline = Pipeline::new(subtotal);
            apply(&order, &mut pipeline)?;

            assert_eq!(pipeline.total(), subtotal);
        }

        Ok(())
    }

    #[test]
    fn no_mice_at_all_gets_no_gift() -> TestResult {
        let order = Order::with_items(batch(Category::Processor, 3, 1000)?, GBP)?;
        let subtotal = order.subtotal()?;

        let mut pipeline = Pipeline::new(subtotal);
        apply(&order, &mut pipeline)?;

        assert_eq!(pipeline.total(), subtotal);

        Ok(())
    }

    #[test]
    fn matched_counts_gift_the_cheapest_pick() -> TestResult {
        for count in 1..=10 {
            let mut items = batch(Category::Mouse, count, 500)?;
            items.extend(batch(Category::Keyboard, count, 1000)?);

            let order = Order::with_items(items, GBP)?;
            let subtotal = order.subtotal()?;

            let mut pipeline = Pipeline::new(subtotal);
            apply(&order, &mut pipeline)?;

            // The cheapest mouse costs 500 minor units and no mouse gift preceded us.
            assert_eq!(pipeline.total(), subtotal.sub(Money::from_minor(500, GBP))?);
        }

        Ok(())
    }

    #[test]
    fn gifted_cheapest_mouse_shifts_the_pick_to_the_second() -> TestResult {
        // Mice at 200, 400, ... and keyboards at 500, 1000, ...: the cheapest pick (200) is the
        // mouse the overstock rule already gifted, so the second pick (400) comes off.
        let mut items = batch(Category::Mouse, 11, 200)?;
        items.extend(batch(Category::Keyboard, 11, 500)?);

        let order = Order::with_items(items, GBP)?;
        let subtotal = order.subtotal()?;

        let mut pipeline = Pipeline::new(subtotal);
        pipeline.record_gifted_mouse(Money::from_minor(200, GBP));

        apply(&order, &mut pipeline)?;

        assert_eq!(pipeline.total(), subtotal.sub(Money::from_minor(400, GBP))?);

        Ok(())
    }

    #[test]
    fn cheaper_keyboard_keeps_the_first_pick() -> TestResult {
        // The cheapest keyboard (300) undercuts the gifted mouse (500), so the first pick stands.
        let mut items = batch(Category::Mouse, 11, 500)?;
        items.extend(batch(Category::Keyboard, 11, 300)?);

        let order = Order::with_items(items, GBP)?;
        let subtotal = order.subtotal()?;

        let mut pipeline = Pipeline::new(subtotal);
        pipeline.record_gifted_mouse(Money::from_minor(500, GBP));

        apply(&order, &mut pipeline)?;

        assert_eq!(pipeline.total(), subtotal.sub(Money::from_minor(300, GBP))?);

        Ok(())
    }
}
