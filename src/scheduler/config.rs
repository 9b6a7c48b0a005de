//! # Playback configuration.
//!
//! Provides [`PlaybackConfig`] — the knobs a run reads at start.
//!
//! ## Snapshot semantics
//! The scheduler reads the config **once per run**: the delay multiplier is
//! folded into every delay when `start()` computes them, so mutating a
//! config value after a run began can never move an already-scheduled fire
//! time. The logging knobs are likewise snapshotted when a
//! [`LogWriter`](crate::LogWriter) is constructed from the config.

/// Configuration for a playback run.
///
/// ## Field semantics
/// - `base_delay_multiplier`: scale applied to every computed delay
///   (`1.0` = strategy delays as-is; `0.0` = everything fires immediately,
///   still through the asynchronous path)
/// - `logging_enabled`: initial mute state for a config-built `LogWriter`
/// - `log_prefix`: literal prefix in front of each log line's tag
/// - `timestamps_enabled`: append `at=<unix ms>` to log lines
#[derive(Clone, Debug)]
pub struct PlaybackConfig {
    /// Scale factor applied to every computed delay.
    ///
    /// Non-finite or negative values are treated as `1.0`; see
    /// [`PlaybackConfig::delay_multiplier`].
    pub base_delay_multiplier: f64,

    /// Whether a config-built log writer starts unmuted.
    pub logging_enabled: bool,

    /// Literal prefix for log lines (empty = none).
    pub log_prefix: String,

    /// Whether log lines carry a wall-clock timestamp.
    pub timestamps_enabled: bool,
}

impl PlaybackConfig {
    /// Returns the delay multiplier with malformed values clamped out:
    /// anything non-finite or negative falls back to `1.0`.
    #[inline]
    pub fn delay_multiplier(&self) -> f64 {
        let m = self.base_delay_multiplier;
        if m.is_finite() && m >= 0.0 {
            m
        } else {
            1.0
        }
    }
}

impl Default for PlaybackConfig {
    /// Default configuration:
    ///
    /// - `base_delay_multiplier = 1.0` (strategy delays as-is)
    /// - `logging_enabled = true`
    /// - `log_prefix = ""`
    /// - `timestamps_enabled = false`
    fn default() -> Self {
        Self {
            base_delay_multiplier: 1.0,
            logging_enabled: true,
            log_prefix: String::new(),
            timestamps_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_clamps_malformed_values() {
        let mut cfg = PlaybackConfig::default();
        assert_eq!(cfg.delay_multiplier(), 1.0);

        cfg.base_delay_multiplier = 2.5;
        assert_eq!(cfg.delay_multiplier(), 2.5);

        cfg.base_delay_multiplier = 0.0;
        assert_eq!(cfg.delay_multiplier(), 0.0);

        cfg.base_delay_multiplier = -3.0;
        assert_eq!(cfg.delay_multiplier(), 1.0);

        cfg.base_delay_multiplier = f64::NAN;
        assert_eq!(cfg.delay_multiplier(), 1.0);

        cfg.base_delay_multiplier = f64::INFINITY;
        assert_eq!(cfg.delay_multiplier(), 1.0);
    }
}
