//! Volume Discount
//!
//! Running totals strictly over the threshold are reduced by ten percent. The rule reads the
//! total left by the earlier gifts, not the order subtotal.

use decimal_percentage::Percentage;
use rusty_money::Money;
use tracing::debug;

use crate::{
    discounts::percent_of_minor,
    promotions::{Pipeline, Promotion, PromotionError},
};

/// Totals strictly above 1,000.00 (in minor units of a two-decimal currency) qualify.
const THRESHOLD_MINOR: i64 = 100_000;

pub(crate) fn apply<'a>(pipeline: &mut Pipeline<'a>) -> Result<(), PromotionError> {
    let total = pipeline.total();

    if total.to_minor_units() <= THRESHOLD_MINOR {
        return Ok(());
    }

    let off = percent_of_minor(&Percentage::from(0.1), total.to_minor_units())?;
    let amount = Money::from_minor(off, total.currency());

    debug!(%amount, "volume discount applied");

    pipeline.discount(Promotion::VolumeDiscount, amount)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn totals_at_or_under_the_threshold_are_unchanged() -> TestResult {
        for minor in [100, 50_000, 99_999, 100_000] {
            let mut pipeline = Pipeline::new(Money::from_minor(minor, GBP));

            apply(&mut pipeline)?;

            assert_eq!(pipeline.total(), Money::from_minor(minor, GBP));
        }

        Ok(())
    }

    #[test]
    fn totals_over_the_threshold_lose_ten_percent() -> TestResult {
        let mut pipeline = Pipeline::new(Money::from_minor(100_100, GBP));

        apply(&mut pipeline)?;

        assert_eq!(pipeline.total(), Money::from_minor(90_090, GBP));

        Ok(())
    }

    #[test]
    fn ten_percent_rounds_midpoints_away_from_zero() -> TestResult {
        let mut pipeline = Pipeline::new(Money::from_minor(100_005, GBP));

        apply(&mut pipeline)?;

        // Ten percent of 100,005 is 10,000.5, which rounds to 10,001.
        assert_eq!(pipeline.total(), Money::from_minor(90_004, GBP));

        Ok(())
    }
}
