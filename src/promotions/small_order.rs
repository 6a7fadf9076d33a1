//! Small Order
//!
//! Running totals strictly under the threshold pay a flat commission. The rule runs last, so a
//! total the volume discount pushed below the threshold is charged too.

use rusty_money::Money;
use tracing::debug;

use crate::promotions::{Pipeline, Promotion, PromotionError};

/// Totals strictly below 10.00 (in minor units of a two-decimal currency) pay the commission.
const THRESHOLD_MINOR: i64 = 1_000;

/// The flat commission, 2.00 in minor units.
const COMMISSION_MINOR: i64 = 200;

pub(crate) fn apply<'a>(pipeline: &mut Pipeline<'a>) -> Result<(), PromotionError> {
    let total = pipeline.total();

    if total.to_minor_units() >= THRESHOLD_MINOR {
        return Ok(());
    }

    let amount = Money::from_minor(COMMISSION_MINOR, total.currency());

    debug!(%amount, "small-order commission applied");

    pipeline.surcharge(Promotion::SmallOrderFee, amount)
}
