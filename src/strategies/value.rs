//! # Value-derived delay.

use std::time::Duration;

use crate::items::Playable;
use crate::strategies::strategy::DelayStrategy;

/// Delay each item by its own [`delay_basis`](Playable::delay_basis), read
/// as milliseconds.
///
/// With items `[30, 10, 20]` this displays index 1 first (≈10ms), then
/// index 2 (≈20ms), then index 0 (≈30ms).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueDelay;

impl DelayStrategy for ValueDelay {
    fn compute(&self, item: &dyn Playable, _index: usize) -> Duration {
        Duration::from_millis(item.delay_basis())
    }

    fn name(&self) -> &'static str {
        "value"
    }

    fn description(&self) -> &'static str {
        "delay = the item's own basis, in milliseconds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;

    #[test]
    fn reads_the_item_basis() {
        let item = Item::new("a", 30);
        assert_eq!(ValueDelay.compute(&item, 0), Duration::from_millis(30));
        // Index is irrelevant for value-derived delays.
        assert_eq!(ValueDelay.compute(&item, 99), Duration::from_millis(30));
    }
}
