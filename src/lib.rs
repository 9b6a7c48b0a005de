//! # playcast
//!
//! **playcast** is a small library for playing back a sequence of items over
//! time. Each item's display is delayed by a duration derived from the item
//! itself through a pluggable [`DelayStrategy`], and a set of independent
//! observers is notified of every lifecycle event.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │     Item     │   │     Item     │   │     Item     │
//!     │  (index 0)   │   │  (index 1)   │   │  (index 2)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Scheduler (one run per instance)                                 │
//! │  - DelayStrategy: (item, index) → Duration, computed up front     │
//! │  - one spawned timer callback per item (fan-out, not sequential)  │
//! │  - atomic completed-counter + phase CAS (terminal exactly once)   │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!   sleep(30ms)        sleep(10ms)        sleep(20ms)
//!        │                  │                  │
//!        │ publish          │ publish          │ publish
//!        ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    Bus (ordered observer registry)                │
//! │        snapshot-before-iterate, per-observer panic isolation      │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                   ┌───────────┬───────────┬───────────┐
//!                   ▼           ▼           ▼           ▼
//!              LogWriter  StatsCollector  HistoryRecorder  custom
//! ```
//!
//! ### Lifecycle
//! ```text
//! start(items, strategy)
//!   ├─► items empty?         → Err(ScheduleError::EmptyInput), no events
//!   ├─► CAS Idle → Running   → Err(ScheduleError::AlreadyStarted) otherwise
//!   ├─► publish RunStarted   (always observed before any ItemDisplayed)
//!   ├─► per item: spawn { sleep(delay) → display() → publish ItemDisplayed
//!   │                      → completed += 1 }
//!   │        │
//!   │        ├─ completed == total → CAS Running → Completed
//!   │        │                       → publish RunCompleted (exactly once)
//!   │        └─ display() failed   → CAS Running → Failed
//!   │                                → publish RunFailed, cancel the rest
//!   └─► returns RunHandle immediately; the handle resolves exactly once
//!       when the run reaches a terminal phase
//!
//! cancel()
//!   └─► CAS Running → Cancelled → cancel pending timers → publish RunCancelled
//!       (callbacks that already fired are un-cancellable)
//! ```
//!
//! Firing order is governed solely by the computed delays and timer
//! granularity, never by registration order; two items with equal delays may
//! display in either order. The only ordering guarantees are that
//! `RunStarted` precedes every `ItemDisplayed` of the run, and the single
//! terminal event comes after every published `ItemDisplayed`.
//!
//! ## Features
//! | Area           | Description                                                | Key types / traits                      |
//! |----------------|------------------------------------------------------------|-----------------------------------------|
//! | **Items**      | Things to play back, with a per-item delay basis.          | [`Playable`], [`Item`], [`ItemFn`]      |
//! | **Strategies** | Map an item and its index to a delay.                      | [`DelayStrategy`], [`StrategyRegistry`] |
//! | **Events**     | Typed lifecycle events and the fan-out bus.                | [`Event`], [`EventKind`], [`Bus`]       |
//! | **Observers**  | Hook into playback (logging, statistics, history, custom). | [`Observe`]                             |
//! | **Errors**     | Typed errors for scheduling and per-item playback.         | [`ScheduleError`], [`PlaybackError`]    |
//! | **Deferral**   | Queue start calls for FIFO replay.                         | [`CommandQueue`]                        |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use playcast::{Item, LogWriter, PlaybackConfig, RunOutcome, SchedulerBuilder, ValueDelay};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scheduler = SchedulerBuilder::new(PlaybackConfig::default())
//!         .with_observer(Arc::new(LogWriter::new()))
//!         .build();
//!
//!     // Delay each item by its own value, in milliseconds.
//!     let items = vec![Item::arc("alpha", 30), Item::arc("bravo", 10), Item::arc("charlie", 20)];
//!     let handle = scheduler.start(items, Arc::new(ValueDelay)).await?;
//!
//!     match handle.wait().await {
//!         RunOutcome::Completed(report) => assert_eq!(report.displayed, 3),
//!         other => return Err(format!("run did not complete: {other:?}").into()),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod items;
mod observers;
mod queue;
mod scheduler;
mod strategies;
mod timer;

// ---- Public re-exports ----

pub use error::{PlaybackError, ScheduleError};
pub use events::{Bus, Event, EventKind};
pub use items::{Item, ItemFn, Playable, PlayableRef};
pub use observers::{HistoryEntry, HistoryRecorder, LogWriter, Observe, Statistics, StatsCollector};
pub use queue::CommandQueue;
pub use scheduler::{
    PlaybackConfig, RunHandle, RunOutcome, RunPhase, RunReport, Scheduler, SchedulerBuilder,
};
pub use strategies::{
    DelayStrategy, FixedDelay, GeometricDelay, LinearDelay, StrategyRef, StrategyRegistry,
    ValueDelay,
};
pub use timer::{Sleep, TokioSleep};
