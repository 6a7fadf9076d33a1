//! Gift Ledger

use std::sync::{Mutex, MutexGuard, PoisonError};

use jiff::civil::Time;
use rustc_hash::FxHashSet;
use tracing::debug;
use uuid::Uuid;

use crate::{random::CoinFlip, users::User};

/// Maximum number of happy-hour gifts granted per day window.
pub const MAX_GIFTS_PER_DAY: u32 = 10;

/// Inclusive start of the happy-hour window.
pub const HAPPY_HOUR_START: Time = Time::constant(18, 0, 0, 0);

/// Exclusive end of the happy-hour window.
pub const HAPPY_HOUR_END: Time = Time::constant(19, 0, 0, 0);

#[derive(Debug, Default)]
struct Day {
    granted: u32,
    gifted: FxHashSet<Uuid>,
}

/// Shared record of the happy-hour gifts granted in the current day window.
///
/// One instance is shared by every pricing call; day rollover is an explicit external call to
/// [`GiftLedger::reset_day`], not a hidden clock check.
#[derive(Debug, Default)]
pub struct GiftLedger {
    day: Mutex<Day>,
}

impl GiftLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `at` falls inside the happy-hour window.
    #[must_use]
    pub fn window_contains(at: Time) -> bool {
        HAPPY_HOUR_START <= at && at < HAPPY_HOUR_END
    }

    /// Attempts to grant the user today's happy-hour gift.
    ///
    /// The daily cap check, the already-gifted check, the coin flip and the recording of the
    /// grant happen as one atomic step, so concurrent calls can neither overshoot
    /// [`MAX_GIFTS_PER_DAY`] nor gift the same user twice. The coin is only flipped once the cap
    /// and membership checks have passed.
    pub fn try_grant<C: CoinFlip>(&self, user: &User, coin: &C) -> bool {
        let mut day = self.lock();

        if day.granted >= MAX_GIFTS_PER_DAY {
            return false;
        }

        if day.gifted.contains(&user.id()) {
            return false;
        }

        if !coin.flip() {
            return false;
        }

        day.granted += 1;
        day.gifted.insert(user.id());

        debug!(user = %user.id(), granted = day.granted, "happy-hour gift granted");

        true
    }

    /// Number of gifts granted since the last day reset.
    #[must_use]
    pub fn gifts_granted(&self) -> u32 {
        self.lock().granted
    }

    /// Returns whether the user has already been gifted since the last day reset.
    #[must_use]
    pub fn was_gifted(&self, user: &User) -> bool {
        self.lock().gifted.contains(&user.id())
    }

    /// Starts a new day window, clearing the grant count and the gifted set.
    pub fn reset_day(&self) {
        let mut day = self.lock();

        day.granted = 0;
        day.gifted.clear();

        debug!("gift ledger day reset");
    }

    fn lock(&self) -> MutexGuard<'_, Day> {
        self.day.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
