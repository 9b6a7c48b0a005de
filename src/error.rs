//! Error types used by the playback runtime and per-item callbacks.
//!
//! This module defines two error enums:
//!
//! - [`ScheduleError`] — fail-fast errors raised synchronously by scheduling
//!   operations, before any event is published.
//! - [`PlaybackError`] — errors raised by an individual item's display
//!   callback; fatal to the run that contains it.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. Observer panics are deliberately *not* represented here:
//! they are isolated per observer and reported back through the bus as
//! [`EventKind::ObserverPanicked`](crate::EventKind::ObserverPanicked)
//! events, never as errors of the run.

use thiserror::Error;

/// # Errors raised by scheduling operations.
///
/// These fail fast and synchronously: when one is returned, no event has
/// been published for the attempted run.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The input sequence was empty; there is nothing to play back.
    #[error("no items to schedule")]
    EmptyInput,

    /// No strategy is registered under the requested identifier.
    #[error("unknown delay strategy: {id:?}")]
    UnknownStrategy {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The scheduler has already been started; one instance drives one run.
    #[error("scheduler already started (phase: {phase})")]
    AlreadyStarted {
        /// The phase the scheduler was in when `start()` was rejected.
        phase: &'static str,
    },
}

impl ScheduleError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use playcast::ScheduleError;
    ///
    /// assert_eq!(ScheduleError::EmptyInput.as_label(), "schedule_empty_input");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ScheduleError::EmptyInput => "schedule_empty_input",
            ScheduleError::UnknownStrategy { .. } => "schedule_unknown_strategy",
            ScheduleError::AlreadyStarted { .. } => "schedule_already_started",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ScheduleError::EmptyInput => "empty input sequence".to_string(),
            ScheduleError::UnknownStrategy { id } => format!("no strategy registered for {id:?}"),
            ScheduleError::AlreadyStarted { phase } => {
                format!("start rejected; scheduler phase={phase}")
            }
        }
    }
}

/// # Errors raised by an item's display callback.
///
/// A display failure is fatal to its run: the scheduler transitions to
/// `Failed`, publishes a single `RunFailed` event, and suppresses any later
/// `RunCompleted`. No retries are built in; retry policy belongs to callers
/// wrapping `start()`.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum PlaybackError {
    /// The item's display hook reported an unrecoverable error.
    #[error("display failed for {item:?}: {error}")]
    Display {
        /// Name of the item whose display failed.
        item: String,
        /// The underlying error message.
        error: String,
    },
}

impl PlaybackError {
    /// Builds a display failure for the named item.
    pub fn display(item: impl Into<String>, error: impl Into<String>) -> Self {
        PlaybackError::Display {
            item: item.into(),
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use playcast::PlaybackError;
    ///
    /// let err = PlaybackError::display("alpha", "boom");
    /// assert_eq!(err.as_label(), "playback_display_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PlaybackError::Display { .. } => "playback_display_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PlaybackError::Display { item, error } => format!("item {item:?} failed: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_labels_are_stable() {
        assert_eq!(ScheduleError::EmptyInput.as_label(), "schedule_empty_input");
        let unknown = ScheduleError::UnknownStrategy {
            id: "nope".to_string(),
        };
        assert_eq!(unknown.as_label(), "schedule_unknown_strategy");
        let busy = ScheduleError::AlreadyStarted { phase: "running" };
        assert_eq!(busy.as_label(), "schedule_already_started");
    }

    #[test]
    fn messages_carry_details() {
        let unknown = ScheduleError::UnknownStrategy {
            id: "warp".to_string(),
        };
        assert!(unknown.as_message().contains("warp"));

        let err = PlaybackError::display("alpha", "boom");
        assert!(err.as_message().contains("alpha"));
        assert!(err.as_message().contains("boom"));
    }
}
