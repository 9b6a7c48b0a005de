//! # Stateful observer that aggregates run statistics.
//!
//! [`StatsCollector`] accumulates counters from the event stream: how many
//! items were displayed, the sum of their scheduled delays, per-kind event
//! counts, and the first/last timestamps it observed.
//!
//! ## Architecture
//! ```text
//!  Scheduler ── publish(Event) ──► Bus ──► StatsCollector
//!                                              │
//!                              (counters behind a Mutex)
//!                                              │
//!                 snapshot() ──► Statistics     reset() ──► zeroed
//! ```
//!
//! The run duration reported by [`Statistics`] is only meaningful once a
//! terminal event (`RunCompleted` / `RunFailed` / `RunCancelled`) has been
//! observed. `reset()` zeroes everything and is safe to call between runs:
//! a subsequent run populates the collector exactly as it would a fresh
//! instance.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::{Event, EventKind};
use crate::observers::observe::Observe;

/// Snapshot of the collector's accumulated state.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Number of `ItemDisplayed` events observed.
    pub displayed: u64,
    /// Sum of the scheduled delays of displayed items.
    pub total_delay: Duration,
    /// `total_delay / displayed`, when anything was displayed.
    pub average_delay: Option<Duration>,
    /// Timestamp of the observed `RunStarted`, if any.
    pub started_at: Option<SystemTime>,
    /// Timestamp of the observed terminal event, if any.
    pub ended_at: Option<SystemTime>,
    /// `ended_at − started_at`, when both were observed.
    pub duration: Option<Duration>,
    /// Event counts keyed by kind label.
    pub counts: HashMap<&'static str, u64>,
}

impl Statistics {
    /// Count of events observed for the given kind label.
    pub fn count_of(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct StatsInner {
    displayed: u64,
    total_delay: Duration,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    counts: HashMap<&'static str, u64>,
}

/// Aggregating observer.
///
/// Thread-safe; the accumulated state is private to the collector.
#[derive(Default)]
pub struct StatsCollector {
    inner: Mutex<StatsInner>,
}

impl StatsCollector {
    /// Creates a new, zeroed collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current counters.
    pub async fn snapshot(&self) -> Statistics {
        let inner = self.inner.lock().await;
        let average_delay = if inner.displayed > 0 {
            Some(inner.total_delay / inner.displayed as u32)
        } else {
            None
        };
        let duration = match (inner.started_at, inner.ended_at) {
            (Some(start), Some(end)) => end.duration_since(start).ok(),
            _ => None,
        };
        Statistics {
            displayed: inner.displayed,
            total_delay: inner.total_delay,
            average_delay,
            started_at: inner.started_at,
            ended_at: inner.ended_at,
            duration,
            counts: inner.counts.clone(),
        }
    }

    /// Zeroes all counters. Safe to call between runs.
    pub async fn reset(&self) {
        *self.inner.lock().await = StatsInner::default();
    }
}

#[async_trait]
impl Observe for StatsCollector {
    async fn on_event(&self, event: &Event) {
        let mut inner = self.inner.lock().await;
        *inner.counts.entry(event.kind.as_label()).or_default() += 1;
        match &event.kind {
            EventKind::RunStarted => {
                inner.started_at = Some(event.at);
            }
            EventKind::ItemDisplayed { delay, .. } => {
                inner.displayed += 1;
                inner.total_delay = inner.total_delay.saturating_add(*delay);
            }
            EventKind::RunCompleted | EventKind::RunFailed { .. } | EventKind::RunCancelled => {
                inner.ended_at = Some(event.at);
            }
            EventKind::ObserverPanicked { .. } => {}
        }
    }

    fn name(&self) -> &'static str {
        "stats"
    }
}
