//! # Simple logging observer.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [started]
//! [displayed] item=bravo index=1 delay=10ms
//! [displayed] item=charlie index=2 delay=20ms
//! [displayed] item=alpha index=0 delay=30ms
//! [completed]
//! [failed] reason="device unavailable"
//! [observer-panicked] observer=stats reason="boom"
//! ```
//!
//! A configured prefix goes in front of the tag, and timestamps (unix
//! milliseconds) are appended when enabled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::observers::observe::Observe;
use crate::scheduler::PlaybackConfig;

/// Stdout logging observer.
///
/// Formatting knobs are snapshotted at construction; the mute flag can be
/// flipped at any time. The handler never panics.
pub struct LogWriter {
    muted: AtomicBool,
    prefix: String,
    timestamps: bool,
}

impl LogWriter {
    /// Creates an unmuted writer with no prefix and no timestamps.
    pub fn new() -> Self {
        Self {
            muted: AtomicBool::new(false),
            prefix: String::new(),
            timestamps: false,
        }
    }

    /// Creates a writer honoring the config's logging knobs:
    /// `logging_enabled` (as the initial mute state), `log_prefix`, and
    /// `timestamps_enabled`.
    pub fn from_config(cfg: &PlaybackConfig) -> Self {
        Self {
            muted: AtomicBool::new(!cfg.logging_enabled),
            prefix: cfg.log_prefix.clone(),
            timestamps: cfg.timestamps_enabled,
        }
    }

    /// Mutes or unmutes the writer.
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    /// True if the writer is currently muted.
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Timestamp suffix for the line, or empty when disabled.
    fn stamp(&self, at: SystemTime) -> String {
        if !self.timestamps {
            return String::new();
        }
        let ms = at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!(" at={ms}")
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Observe for LogWriter {
    async fn on_event(&self, e: &Event) {
        if self.is_muted() {
            return;
        }
        let p = &self.prefix;
        let ts = self.stamp(e.at);
        match &e.kind {
            EventKind::RunStarted => {
                println!("{p}[started]{ts}");
            }
            EventKind::ItemDisplayed { item, index, delay } => {
                println!(
                    "{p}[displayed] item={} index={index} delay={:?}{ts}",
                    item.name(),
                    delay
                );
            }
            EventKind::RunCompleted => {
                println!("{p}[completed]{ts}");
            }
            EventKind::RunFailed { reason } => {
                println!("{p}[failed] reason={reason:?}{ts}");
            }
            EventKind::RunCancelled => {
                println!("{p}[cancelled]{ts}");
            }
            EventKind::ObserverPanicked { observer, reason } => {
                println!("{p}[observer-panicked] observer={observer} reason={reason:?}{ts}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_flag_round_trips() {
        let writer = LogWriter::new();
        assert!(!writer.is_muted());
        writer.set_muted(true);
        assert!(writer.is_muted());
        writer.set_muted(false);
        assert!(!writer.is_muted());
    }

    #[test]
    fn config_controls_initial_state() {
        let mut cfg = PlaybackConfig::default();
        cfg.logging_enabled = false;
        cfg.log_prefix = "demo ".to_string();
        let writer = LogWriter::from_config(&cfg);
        assert!(writer.is_muted());
        assert_eq!(writer.prefix, "demo ");
    }
}
