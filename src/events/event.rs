//! # Lifecycle events emitted during a playback run.
//!
//! [`EventKind`] is a closed set of variants, each carrying only the fields
//! relevant to that kind. The [`Event`] struct wraps a kind with the
//! metadata every emission shares: a wall-clock timestamp and a globally
//! monotonic sequence number.
//!
//! ## Ordering
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically across runs. Observers that record events concurrently can
//! use `seq` to restore publish order.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use playcast::{Event, EventKind, Item};
//!
//! let ev = Event::new(EventKind::ItemDisplayed {
//!     item: Item::arc("demo", 10),
//!     index: 1,
//!     delay: Duration::from_millis(10),
//! });
//!
//! assert_eq!(ev.kind.as_label(), "item_displayed");
//! assert_eq!(ev.item_name().as_deref(), Some("demo"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::items::PlayableRef;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events, with per-kind payloads.
#[derive(Clone)]
pub enum EventKind {
    /// A run transitioned to `Running`. Published exactly once per run,
    /// before any `ItemDisplayed` of the same run.
    RunStarted,

    /// An item's timer fired and its display hook succeeded.
    ItemDisplayed {
        /// The item that was displayed.
        item: PlayableRef,
        /// The item's position in the input sequence.
        index: usize,
        /// The delay this item was scheduled with.
        delay: Duration,
    },

    /// Every item of the run has been displayed. Published exactly once,
    /// after the last `ItemDisplayed`, and never after `RunFailed` or
    /// `RunCancelled`.
    RunCompleted,

    /// An item's display hook failed; the run is over. Published exactly
    /// once; suppresses `RunCompleted` for the run.
    RunFailed {
        /// Message of the fatal playback error.
        reason: Arc<str>,
    },

    /// The run was cancelled before completion. Published exactly once.
    RunCancelled,

    /// An observer panicked while handling an event. Reported through the
    /// bus after the triggering fan-out finishes; never fatal to the run.
    ObserverPanicked {
        /// Name of the panicking observer.
        observer: &'static str,
        /// Panic payload, downcast to a message where possible.
        reason: Arc<str>,
    },
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::RunStarted => "run_started",
            EventKind::ItemDisplayed { .. } => "item_displayed",
            EventKind::RunCompleted => "run_completed",
            EventKind::RunFailed { .. } => "run_failed",
            EventKind::RunCancelled => "run_cancelled",
            EventKind::ObserverPanicked { .. } => "observer_panicked",
        }
    }
}

/// One lifecycle event, constructed once per emission and never mutated
/// after publish.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs and statistics)
/// - `kind`: the variant plus its payload
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp taken at construction.
    pub at: SystemTime,
    /// Event classification and payload.
    pub kind: EventKind,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
        }
    }

    /// Creates an observer panic report.
    #[inline]
    pub(crate) fn observer_panicked(observer: &'static str, info: String) -> Self {
        Event::new(EventKind::ObserverPanicked {
            observer,
            reason: info.into(),
        })
    }

    /// True for observer panic reports; used by the bus to avoid
    /// panic-on-panic loops.
    #[inline]
    pub fn is_observer_panic(&self) -> bool {
        matches!(self.kind, EventKind::ObserverPanicked { .. })
    }

    /// Name of the item this event concerns, if any.
    pub fn item_name(&self) -> Option<String> {
        match &self.kind {
            EventKind::ItemDisplayed { item, .. } => Some(item.name().to_string()),
            _ => None,
        }
    }

    /// The scheduled delay this event carries, if any.
    pub fn delay(&self) -> Option<Duration> {
        match &self.kind {
            EventKind::ItemDisplayed { delay, .. } => Some(*delay),
            _ => None,
        }
    }

    /// The input-sequence index this event carries, if any.
    pub fn index(&self) -> Option<usize> {
        match &self.kind {
            EventKind::ItemDisplayed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::new(EventKind::RunStarted);
        let b = Event::new(EventKind::RunCompleted);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn displayed_payload_accessors() {
        let ev = Event::new(EventKind::ItemDisplayed {
            item: Item::arc("demo", 25),
            index: 3,
            delay: Duration::from_millis(25),
        });
        assert_eq!(ev.item_name().as_deref(), Some("demo"));
        assert_eq!(ev.index(), Some(3));
        assert_eq!(ev.delay(), Some(Duration::from_millis(25)));
        assert!(!ev.is_observer_panic());
    }

    #[test]
    fn panic_reports_are_flagged() {
        let ev = Event::observer_panicked("stats", "boom".to_string());
        assert!(ev.is_observer_panic());
        assert_eq!(ev.kind.as_label(), "observer_panicked");
        assert_eq!(ev.item_name(), None);
    }
}
