//! Playback core: orchestration and lifecycle.
//!
//! The public API from this module is [`Scheduler`] (one playback run per
//! instance), its [`SchedulerBuilder`], the run-facing types
//! ([`RunHandle`], [`RunOutcome`], [`RunPhase`], [`RunReport`]) and
//! [`PlaybackConfig`].
//!
//! ## High-level wiring
//! ```text
//! Inputs to start():
//!   Vec<PlayableRef> + StrategyRef ──► Scheduler::start(items, strategy)
//!
//! Preparation:
//!   - reject empty input (no events published)
//!   - CAS phase Idle → Running (one run per scheduler instance)
//!   - delay[i] = strategy.compute(item, i) × cfg.base_delay_multiplier
//!     (all delays fixed up front; config is a per-run snapshot)
//!   - publish RunStarted, then spawn one callback per item
//!
//! Per-item callback:
//!   select { cancelled → exit, sleep(delay[i]) → continue }
//!   item.display().await
//!     ├─ Ok  → publish ItemDisplayed → completed.fetch_add(1)
//!     │         └─ reached total? CAS Running → Completed
//!     │                           → publish RunCompleted, resolve handle
//!     └─ Err → CAS Running → Failed
//!               → cancel the rest, publish RunFailed, resolve handle
//! ```
//!
//! The `completed` counter and the phase CAS together are the single
//! linearization point: each callback increments only after its own
//! `ItemDisplayed` publish returned, so the callback that reaches `total`
//! and wins the CAS publishes the terminal event strictly after every
//! display of the run — under any interleaving of timer callbacks.

mod builder;
mod config;
mod core;
mod run;

pub use builder::SchedulerBuilder;
pub use config::PlaybackConfig;
pub use run::{RunHandle, RunOutcome, RunPhase, RunReport};
pub use self::core::Scheduler;
