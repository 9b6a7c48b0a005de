//! # Event observers for the playback runtime.
//!
//! This module provides the [`Observe`] trait and built-in implementations
//! for handling lifecycle events delivered through the
//! [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Scheduler ── publish(&Event) ──► Bus ──► each observer, in order
//!                                              │
//!                                         Observe::on_event(&Event)
//!                                              │
//!                                    ┌─────────┼──────────────┐
//!                                    ▼         ▼              ▼
//!                               LogWriter  StatsCollector  HistoryRecorder
//! ```
//!
//! ## Observer types
//! - **Passive observers** — react to events without state (logging, alerts)
//! - **Stateful observers** — accumulate private state from events
//!   (statistics, history); they never mutate anything shared
//!
//! ## Implementing custom observers
//! ```rust
//! use playcast::{Event, EventKind, Observe};
//! use async_trait::async_trait;
//!
//! struct FailureAlert;
//!
//! #[async_trait]
//! impl Observe for FailureAlert {
//!     async fn on_event(&self, event: &Event) {
//!         if let EventKind::RunFailed { reason } = &event.kind {
//!             eprintln!("playback failed: {reason}");
//!         }
//!     }
//! }
//! ```

mod history;
mod log;
mod observe;
mod stats;

pub use history::{HistoryEntry, HistoryRecorder};
pub use log::LogWriter;
pub use observe::Observe;
pub use stats::{Statistics, StatsCollector};
