//! # Geometric (exponentially growing) delay.
//!
//! [`GeometricDelay`] spaces items out multiplicatively. It is
//! parameterized by:
//! - [`GeometricDelay::first`] the delay of the item at index 0;
//! - [`GeometricDelay::factor`] the multiplicative growth factor;
//! - [`GeometricDelay::max`] the maximum delay cap.
//!
//! The delay for index `n` is computed as `first × factor^n`, clamped to
//! `max`. The base is derived purely from the index, so every item's delay
//! is independent of any other item's.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use playcast::{DelayStrategy, GeometricDelay, Item};
//!
//! let strategy = GeometricDelay {
//!     first: Duration::from_millis(100),
//!     factor: 2.0,
//!     max: Duration::from_secs(10),
//! };
//! let item = Item::new("a", 0);
//!
//! // Index 0 — uses 'first' (100ms).
//! assert_eq!(strategy.compute(&item, 0), Duration::from_millis(100));
//!
//! // Index 1 — first × factor^1 = 200ms.
//! assert_eq!(strategy.compute(&item, 1), Duration::from_millis(200));
//!
//! // Index 10 — 100ms × 2^10 = 102_400ms → capped at max=10s.
//! assert_eq!(strategy.compute(&item, 10), Duration::from_secs(10));
//! ```

use std::time::Duration;

use crate::items::Playable;
use crate::strategies::strategy::DelayStrategy;

/// Multiplicatively growing delay schedule.
///
/// ## Notes
/// - If `factor` is less than 1.0, delays shrink with higher indices (not
///   typical).
/// - If `factor` equals 1.0, every delay is `first` (up to `max`).
/// - If `factor` is greater than 1.0, delays grow exponentially up to `max`.
#[derive(Clone, Copy, Debug)]
pub struct GeometricDelay {
    /// Delay of the item at index 0.
    pub first: Duration,
    /// Multiplicative growth factor (`>= 1.0` recommended).
    pub factor: f64,
    /// Maximum delay cap.
    pub max: Duration,
}

impl Default for GeometricDelay {
    /// Returns a strategy with:
    /// - `first = 100ms`;
    /// - `factor = 2.0` (doubling);
    /// - `max = 30s`.
    fn default() -> Self {
        Self {
            first: Duration::from_millis(100),
            factor: 2.0,
            max: Duration::from_secs(30),
        }
    }
}

impl GeometricDelay {
    /// Computes the delay for the given index.
    ///
    /// The base is `first × factor^index`, clamped to [`GeometricDelay::max`].
    /// Non-finite or negative intermediate values (overflowing exponents,
    /// pathological factors) clamp to `max` as well.
    fn delay_for(&self, index: usize) -> Duration {
        let max_secs = self.max.as_secs_f64();
        let clamped_exp = index.min(i32::MAX as usize) as i32;
        let unclamped_secs = self.first.as_secs_f64() * self.factor.powi(clamped_exp);

        if !unclamped_secs.is_finite() || unclamped_secs < 0.0 || unclamped_secs > max_secs {
            self.max
        } else {
            Duration::from_secs_f64(unclamped_secs)
        }
    }
}

impl DelayStrategy for GeometricDelay {
    fn compute(&self, _item: &dyn Playable, index: usize) -> Duration {
        self.delay_for(index)
    }

    fn name(&self) -> &'static str {
        "geometric"
    }

    fn description(&self) -> &'static str {
        "delay = first x factor^index, clamped to max"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;
    use std::time::Duration;

    fn strategy(first_ms: u64, factor: f64, max: Duration) -> GeometricDelay {
        GeometricDelay {
            first: Duration::from_millis(first_ms),
            factor,
            max,
        }
    }

    #[test]
    fn index_zero_returns_first() {
        let s = strategy(100, 2.0, Duration::from_secs(30));
        let item = Item::new("a", 0);
        assert_eq!(s.compute(&item, 0), Duration::from_millis(100));
    }

    #[test]
    fn exponential_growth() {
        let s = strategy(100, 2.0, Duration::from_secs(30));
        let item = Item::new("a", 0);

        assert_eq!(s.compute(&item, 0), Duration::from_millis(100));
        assert_eq!(s.compute(&item, 1), Duration::from_millis(200));
        assert_eq!(s.compute(&item, 2), Duration::from_millis(400));
        assert_eq!(s.compute(&item, 3), Duration::from_millis(800));
        assert_eq!(s.compute(&item, 4), Duration::from_millis(1600));
    }

    #[test]
    fn constant_factor() {
        let s = strategy(500, 1.0, Duration::from_secs(30));
        let item = Item::new("a", 0);
        for index in 0..10 {
            assert_eq!(
                s.compute(&item, index),
                Duration::from_millis(500),
                "index {} should be constant at 500ms",
                index
            );
        }
    }

    #[test]
    fn clamped_to_max() {
        let s = strategy(100, 2.0, Duration::from_secs(1));
        let item = Item::new("a", 0);
        assert_eq!(s.compute(&item, 10), Duration::from_secs(1));
    }

    #[test]
    fn first_exceeds_max() {
        let s = strategy(10_000, 2.0, Duration::from_secs(5));
        let item = Item::new("a", 0);
        assert_eq!(s.compute(&item, 0), Duration::from_secs(5));
    }

    #[test]
    fn huge_index_clamps_to_max() {
        let s = strategy(100, 2.0, Duration::from_secs(60));
        let item = Item::new("a", 0);
        assert_eq!(s.compute(&item, 100), Duration::from_secs(60));
    }

    #[test]
    fn non_finite_overflow_clamps_to_max() {
        let s = strategy(100, 2.0, Duration::from_secs(10));
        let item = Item::new("a", 0);
        assert_eq!(s.compute(&item, usize::MAX), Duration::from_secs(10));
    }
}
