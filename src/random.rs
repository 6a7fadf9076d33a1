//! Random

use mockall::automock;
use rand::Rng;

/// A source of uniformly distributed random booleans.
///
/// The pricing engine draws at most one flip per call, and only once every other happy-hour gift
/// condition has already passed. Tests inject [`MockCoinFlip`] to pin the draw and to assert the
/// source is left untouched when an earlier condition fails.
#[automock]
pub trait CoinFlip {
    /// Draws one random boolean.
    fn flip(&self) -> bool;
}

/// Coin flips drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCoin;

impl CoinFlip for ThreadCoin {
    fn flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}
