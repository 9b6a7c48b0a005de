//! # Scheduler: timed fan-out with race-safe completion detection.
//!
//! One [`Scheduler`] drives one run: it computes every item's delay up
//! front, spawns one independent timer callback per item, and publishes
//! lifecycle events through the bus as the callbacks resolve in whatever
//! order their delays dictate.
//!
//! ## Rules
//! - `RunStarted` is published (and fully fanned out) **before** any
//!   callback is spawned, so a zero delay can never be observed ahead of
//!   the start event.
//! - Every delay, including zero, goes through the same spawned-task +
//!   timer path; nothing is inlined on the caller.
//! - Each callback increments the shared `completed` counter only **after**
//!   its own `ItemDisplayed` publish returned. The callback whose increment
//!   reaches `total` attempts the `Running → Completed` CAS; the CAS winner
//!   is the only publisher of the terminal event.
//! - A display failure CASes `Running → Failed`, cancels the cohort's
//!   token (aborting not-yet-fired sleeps) and publishes `RunFailed`.
//!   Callbacks that fired but lost the race observe the terminal phase and
//!   publish nothing further.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::error::ScheduleError;
use crate::events::{Bus, Event, EventKind};
use crate::items::PlayableRef;
use crate::observers::Observe;
use crate::scheduler::builder::SchedulerBuilder;
use crate::scheduler::config::PlaybackConfig;
use crate::scheduler::run::{RunHandle, RunOutcome, RunPhase, RunReport};
use crate::strategies::StrategyRef;
use crate::timer::Sleep;

/// Drives one timed playback run and publishes its lifecycle events.
pub struct Scheduler {
    cfg: PlaybackConfig,
    bus: Arc<Bus>,
    timer: Arc<dyn Sleep>,
    phase: Arc<AtomicU8>,
    current: Mutex<Option<Arc<RunCore>>>,
}

impl Scheduler {
    /// Starts building a scheduler with the given configuration.
    pub fn builder(cfg: PlaybackConfig) -> SchedulerBuilder {
        SchedulerBuilder::new(cfg)
    }

    pub(crate) fn new(cfg: PlaybackConfig, bus: Arc<Bus>, timer: Arc<dyn Sleep>) -> Self {
        Self {
            cfg,
            bus,
            timer,
            phase: Arc::new(AtomicU8::new(RunPhase::Idle as u8)),
            current: Mutex::new(None),
        }
    }

    /// The event bus this scheduler publishes to.
    pub fn bus(&self) -> &Arc<Bus> {
        &self.bus
    }

    /// Attaches an observer to the bus. See [`Bus::attach`].
    pub fn attach(&self, observer: Arc<dyn Observe>) -> bool {
        self.bus.attach(observer)
    }

    /// Detaches an observer from the bus. See [`Bus::detach`].
    pub fn detach(&self, observer: &Arc<dyn Observe>) -> bool {
        self.bus.detach(observer)
    }

    /// Current phase of this scheduler's run.
    pub fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Schedules every item for timed display and returns immediately.
    ///
    /// Delays are computed up front — `strategy.compute(item, index)`
    /// scaled by the config's delay multiplier — then one independent
    /// callback per item is spawned. Completion is observed through the
    /// returned [`RunHandle`] or through the terminal events on the bus.
    ///
    /// ## Errors
    /// - [`ScheduleError::EmptyInput`] for an empty sequence; nothing is
    ///   published.
    /// - [`ScheduleError::AlreadyStarted`] when this instance already
    ///   started a run; one scheduler drives one run, a new run needs a new
    ///   scheduler.
    pub async fn start(
        &self,
        items: Vec<PlayableRef>,
        strategy: StrategyRef,
    ) -> Result<RunHandle, ScheduleError> {
        if items.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        self.transition(RunPhase::Idle, RunPhase::Running)
            .map_err(|phase| ScheduleError::AlreadyStarted {
                phase: phase.as_label(),
            })?;

        // Per-run config snapshot: the multiplier is folded into the delays
        // here, so nothing can move a fire time after this point.
        let multiplier = self.cfg.delay_multiplier();
        let delays: Vec<Duration> = items
            .iter()
            .enumerate()
            .map(|(index, item)| scale_delay(strategy.compute(item.as_ref(), index), multiplier))
            .collect();

        let (tx, rx) = oneshot::channel();
        let core = Arc::new(RunCore {
            total: items.len(),
            completed: AtomicUsize::new(0),
            phase: Arc::clone(&self.phase),
            bus: Arc::clone(&self.bus),
            cancel: CancellationToken::new(),
            done: Mutex::new(Some(tx)),
        });
        *lock(&self.current) = Some(Arc::clone(&core));

        // Fully fanned out before the first callback exists.
        self.bus.publish(&Event::new(EventKind::RunStarted)).await;

        for (index, (item, delay)) in items.into_iter().zip(delays).enumerate() {
            let core = Arc::clone(&core);
            let timer = Arc::clone(&self.timer);
            tokio::spawn(fire(core, timer, item, index, delay));
        }
        Ok(RunHandle::new(rx))
    }

    /// Cancels the run if it is still running.
    ///
    /// Not-yet-fired callbacks stop publishing; callbacks that already
    /// fired are un-cancellable. Returns `true` when this call won the
    /// terminal transition and published `RunCancelled`.
    pub async fn cancel(&self) -> bool {
        let Some(core) = lock(&self.current).clone() else {
            return false;
        };
        if core
            .transition(RunPhase::Running, RunPhase::Cancelled)
            .is_err()
        {
            return false;
        }
        core.cancel.cancel();
        core.bus.publish(&Event::new(EventKind::RunCancelled)).await;
        core.resolve(RunOutcome::Cancelled);
        true
    }

    /// Number of items displayed so far in this scheduler's run.
    pub fn displayed(&self) -> usize {
        lock(&self.current)
            .as_ref()
            .map(|core| core.completed.load(Ordering::Acquire))
            .unwrap_or(0)
    }

    fn transition(&self, from: RunPhase, to: RunPhase) -> Result<(), RunPhase> {
        compare_exchange(&self.phase, from, to)
    }
}

/// State shared by one run's cohort of callbacks.
struct RunCore {
    total: usize,
    completed: AtomicUsize,
    phase: Arc<AtomicU8>,
    bus: Arc<Bus>,
    cancel: CancellationToken,
    done: Mutex<Option<oneshot::Sender<RunOutcome>>>,
}

impl RunCore {
    fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn transition(&self, from: RunPhase, to: RunPhase) -> Result<(), RunPhase> {
        compare_exchange(&self.phase, from, to)
    }

    /// Delivers the terminal outcome to the run handle, at most once.
    fn resolve(&self, outcome: RunOutcome) {
        if let Some(tx) = lock(&self.done).take() {
            let _ = tx.send(outcome);
        }
    }
}

/// One item's timed callback.
async fn fire(
    core: Arc<RunCore>,
    timer: Arc<dyn Sleep>,
    item: PlayableRef,
    index: usize,
    delay: Duration,
) {
    tokio::select! {
        _ = core.cancel.cancelled() => return,
        _ = timer.sleep(delay) => {}
    }
    if core.phase() != RunPhase::Running {
        return;
    }

    match item.display().await {
        Ok(()) => {
            if core.phase() != RunPhase::Running {
                return;
            }
            core.bus
                .publish(&Event::new(EventKind::ItemDisplayed { item, index, delay }))
                .await;

            // The increment is ordered after this callback's publish; the
            // CAS below is the run's single terminal linearization point.
            let done = core.completed.fetch_add(1, Ordering::AcqRel) + 1;
            if done == core.total
                && core
                    .transition(RunPhase::Running, RunPhase::Completed)
                    .is_ok()
            {
                core.bus.publish(&Event::new(EventKind::RunCompleted)).await;
                core.resolve(RunOutcome::Completed(RunReport {
                    total: core.total,
                    displayed: done,
                }));
            }
        }
        Err(error) => {
            if core.transition(RunPhase::Running, RunPhase::Failed).is_ok() {
                core.cancel.cancel();
                core.bus
                    .publish(&Event::new(EventKind::RunFailed {
                        reason: error.to_string().into(),
                    }))
                    .await;
                core.resolve(RunOutcome::Failed(error));
            }
        }
    }
}

fn compare_exchange(phase: &AtomicU8, from: RunPhase, to: RunPhase) -> Result<(), RunPhase> {
    phase
        .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
        .map(|_| ())
        .map_err(RunPhase::from_u8)
}

/// Applies the config multiplier without panicking on overflow.
fn scale_delay(delay: Duration, multiplier: f64) -> Duration {
    if multiplier == 1.0 {
        return delay;
    }
    let secs = delay.as_secs_f64() * multiplier;
    if !secs.is_finite() || secs < 0.0 {
        return delay;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
