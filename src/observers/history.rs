//! # Stateful observer that records every delivered event.
//!
//! [`HistoryRecorder`] appends each event it receives, together with its
//! own wall-clock receipt time, to an append-only log.
//!
//! Entries are kept in **delivery order** — the order the bus handed events
//! to this observer — not in input-index order. Because items fire on
//! independent timers, the recorded order is how a run's unordered
//! completions actually interleaved, which is exactly what the history is
//! for.

use std::time::SystemTime;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::Event;
use crate::observers::observe::Observe;

/// One recorded event with its receipt timestamp.
#[derive(Clone)]
pub struct HistoryEntry {
    /// When this recorder received the event.
    pub received_at: SystemTime,
    /// The event as delivered.
    pub event: Event,
}

/// Append-only event log.
#[derive(Default)]
pub struct HistoryRecorder {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryRecorder {
    /// Creates a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an owned snapshot of the log, in delivery order.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.entries.lock().await.clone()
    }

    /// Number of recorded entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True if nothing has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Empties the log. Safe to call between runs.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[async_trait]
impl Observe for HistoryRecorder {
    async fn on_event(&self, event: &Event) {
        let entry = HistoryEntry {
            received_at: SystemTime::now(),
            event: event.clone(),
        };
        self.entries.lock().await.push(entry);
    }

    fn name(&self) -> &'static str {
        "history"
    }
}
