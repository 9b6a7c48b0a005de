//! # Fixed delay.

use std::time::Duration;

use crate::items::Playable;
use crate::strategies::strategy::DelayStrategy;

/// One configured delay for every item, regardless of value or position.
///
/// All items of the run race the same deadline; their display order is
/// deliberately unordered.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    each: Duration,
}

impl FixedDelay {
    /// Creates a strategy that delays every item by `each`.
    pub fn new(each: Duration) -> Self {
        Self { each }
    }
}

impl Default for FixedDelay {
    /// Returns a strategy with a 100ms delay for every item.
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl DelayStrategy for FixedDelay {
    fn compute(&self, _item: &dyn Playable, _index: usize) -> Duration {
        self.each
    }

    fn name(&self) -> &'static str {
        "fixed"
    }

    fn description(&self) -> &'static str {
        "one configured delay for every item"
    }
}
