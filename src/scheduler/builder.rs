//! # Scheduler builder.

use std::sync::Arc;

use crate::events::Bus;
use crate::observers::Observe;
use crate::scheduler::config::PlaybackConfig;
use crate::scheduler::core::Scheduler;
use crate::timer::{Sleep, TokioSleep};

/// Builder assembling a [`Scheduler`] from config, observers and a timer.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use playcast::{HistoryRecorder, PlaybackConfig, SchedulerBuilder, StatsCollector};
///
/// let stats = Arc::new(StatsCollector::new());
/// let history = Arc::new(HistoryRecorder::new());
/// let scheduler = SchedulerBuilder::new(PlaybackConfig::default())
///     .with_observer(stats.clone())
///     .with_observer(history.clone())
///     .build();
/// assert_eq!(scheduler.bus().len(), 2);
/// ```
pub struct SchedulerBuilder {
    cfg: PlaybackConfig,
    observers: Vec<Arc<dyn Observe>>,
    timer: Arc<dyn Sleep>,
}

impl SchedulerBuilder {
    /// Creates a new builder with the given configuration and the
    /// tokio-backed timer.
    pub fn new(cfg: PlaybackConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            timer: Arc::new(TokioSleep),
        }
    }

    /// Appends one observer. Attachment order is delivery order.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Replaces the observer list.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Replaces the timer port (e.g. with a test double).
    pub fn with_timer(mut self, timer: Arc<dyn Sleep>) -> Self {
        self.timer = timer;
        self
    }

    /// Builds the scheduler: a fresh bus with the observers attached, in
    /// order.
    pub fn build(self) -> Arc<Scheduler> {
        let bus = Arc::new(Bus::new());
        for observer in self.observers {
            bus.attach(observer);
        }
        Arc::new(Scheduler::new(self.cfg, bus, self.timer))
    }
}
