//! # Run-facing types: phase, outcome, report, handle.

use tokio::sync::oneshot;

use crate::error::PlaybackError;

/// Phase of a scheduler's single run.
///
/// `Idle` is initial; `Completed`, `Failed` and `Cancelled` are terminal.
/// The transition into a terminal phase happens exactly once, through one
/// compare-and-swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunPhase {
    /// Constructed, not yet started.
    Idle = 0,
    /// `start()` accepted the input; callbacks are in flight.
    Running = 1,
    /// Every item displayed; `RunCompleted` was published.
    Completed = 2,
    /// An item's display failed; `RunFailed` was published.
    Failed = 3,
    /// `cancel()` won the race; `RunCancelled` was published.
    Cancelled = 4,
}

impl RunPhase {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::Completed => "completed",
            RunPhase::Failed => "failed",
            RunPhase::Cancelled => "cancelled",
        }
    }

    /// True for `Completed`, `Failed` and `Cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunPhase::Completed | RunPhase::Failed | RunPhase::Cancelled
        )
    }

    pub(crate) fn from_u8(raw: u8) -> RunPhase {
        match raw {
            1 => RunPhase::Running,
            2 => RunPhase::Completed,
            3 => RunPhase::Failed,
            4 => RunPhase::Cancelled,
            _ => RunPhase::Idle,
        }
    }
}

/// Final accounting of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of items the run was started with.
    pub total: usize,
    /// Number of items displayed. Equals `total` for a completed run.
    pub displayed: usize,
}

/// How a run ended. Delivered exactly once through the [`RunHandle`].
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Every item displayed.
    Completed(RunReport),
    /// An item's display failed and the run was aborted.
    Failed(PlaybackError),
    /// The run was cancelled before completion.
    Cancelled,
}

/// Awaitable completion signal for one run.
///
/// Resolved exactly once, when the run reaches a terminal phase. Dropping
/// the handle does not affect the run; completion is equally observable
/// through the terminal events on the bus.
#[derive(Debug)]
pub struct RunHandle {
    rx: oneshot::Receiver<RunOutcome>,
}

impl RunHandle {
    pub(crate) fn new(rx: oneshot::Receiver<RunOutcome>) -> Self {
        Self { rx }
    }

    /// Waits for the run's terminal phase.
    ///
    /// A run torn down together with its runtime (sender dropped before any
    /// terminal transition) reports `Cancelled`.
    pub async fn wait(self) -> RunOutcome {
        self.rx.await.unwrap_or(RunOutcome::Cancelled)
    }
}
