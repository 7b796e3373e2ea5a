//! Randomness abstraction for the prize pool, injectable for testability.
//!
//! The prize pool grows by a small random amount on every ticket
//! purchase. The randomness is cosmetic (it does not need to be
//! cryptographically strong), but tests need deterministic outcomes,
//! so the source is injected the same way [`Clock`](super::time::Clock) is.

use std::ops::Range;

use rand::Rng;

/// Range of the prize pool increment per ticket purchase (in SOL).
pub const PRIZE_INCREMENT_RANGE: Range<f64> = 0.01..0.11;

/// Source of prize pool increments
pub trait PrizeRng: Send + Sync {
    /// Draw the next prize pool increment, always within
    /// [`PRIZE_INCREMENT_RANGE`].
    fn prize_increment(&self) -> f64;
}

/// Thread-local RNG implementation (used in production)
#[derive(Debug, Clone, Copy)]
pub struct ThreadPrizeRng;

impl PrizeRng for ThreadPrizeRng {
    fn prize_increment(&self) -> f64 {
        rand::rng().random_range(PRIZE_INCREMENT_RANGE)
    }
}

/// Fixed increment implementation for testing
#[derive(Debug, Clone, Copy)]
pub struct FixedPrizeRng {
    increment: f64,
}

impl FixedPrizeRng {
    /// Create a fixed RNG returning the given increment.
    ///
    /// The value is clamped into [`PRIZE_INCREMENT_RANGE`] so that a
    /// misconfigured test cannot violate the pool invariants.
    pub fn new(increment: f64) -> Self {
        Self {
            increment: increment.clamp(
                PRIZE_INCREMENT_RANGE.start,
                // Range end is exclusive
                PRIZE_INCREMENT_RANGE.end - f64::EPSILON,
            ),
        }
    }
}

impl PrizeRng for FixedPrizeRng {
    fn prize_increment(&self) -> f64 {
        self.increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_prize_rng_stays_in_range() {
        // テスト項目: ThreadPrizeRng が常に規定の範囲内の値を返す
        // given (前提条件):
        let rng = ThreadPrizeRng;

        // when (操作) / then (期待する結果):
        for _ in 0..1000 {
            let increment = rng.prize_increment();
            assert!(PRIZE_INCREMENT_RANGE.contains(&increment));
        }
    }

    #[test]
    fn test_fixed_prize_rng_returns_fixed_value() {
        // テスト項目: FixedPrizeRng が固定値を返す
        // given (前提条件):
        let rng = FixedPrizeRng::new(0.05);

        // when (操作):
        let increment1 = rng.prize_increment();
        let increment2 = rng.prize_increment();

        // then (期待する結果):
        assert_eq!(increment1, 0.05);
        assert_eq!(increment2, 0.05);
    }

    #[test]
    fn test_fixed_prize_rng_clamps_out_of_range_value() {
        // テスト項目: 範囲外の値が規定の範囲内にクランプされる
        // given (前提条件):
        let too_small = FixedPrizeRng::new(-1.0);
        let too_large = FixedPrizeRng::new(5.0);

        // when (操作) / then (期待する結果):
        assert!(PRIZE_INCREMENT_RANGE.contains(&too_small.prize_increment()));
        assert!(PRIZE_INCREMENT_RANGE.contains(&too_large.prize_increment()));
    }
}
