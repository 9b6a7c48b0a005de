//! # Index-derived linear delay.

use std::time::Duration;

use crate::items::Playable;
use crate::strategies::strategy::DelayStrategy;

/// Delay = index × step: item 0 fires immediately, item 1 after one step,
/// item 2 after two, producing an evenly staggered playback.
///
/// Indices beyond `u32::MAX` saturate at the maximum representable delay
/// rather than wrapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearDelay {
    step: Duration,
}

impl LinearDelay {
    /// Creates a strategy with the given step between consecutive items.
    pub fn new(step: Duration) -> Self {
        Self { step }
    }
}

impl Default for LinearDelay {
    /// Returns a strategy with a 100ms step.
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl DelayStrategy for LinearDelay {
    fn compute(&self, _item: &dyn Playable, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.step.saturating_mul(steps)
    }

    fn name(&self) -> &'static str {
        "linear"
    }

    fn description(&self) -> &'static str {
        "delay = index x configured step"
    }
}
