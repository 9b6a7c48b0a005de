//! # Event bus: ordered observer registry with synchronous fan-out.
//!
//! [`Bus`] keeps observers in attachment order and delivers each published
//! event to every attached observer, one after the other, before
//! `publish()` returns.
//!
//! ## Rules
//! - **Snapshot-before-iterate**: `publish()` clones the registry first, so
//!   attaching or detaching observers mid-dispatch never corrupts the
//!   fan-out already in progress.
//! - **Attachment order**: observers see events in the order they were
//!   attached.
//! - **Idempotent attach**: attaching the same handle (same `Arc`) twice is
//!   a no-op that keeps the first attachment's position.
//! - **Panic isolation**: a panicking observer is caught and reported as an
//!   [`EventKind::ObserverPanicked`] event routed back through the bus
//!   after the primary fan-out finishes; the remaining observers still
//!   receive the original event. Panics raised while delivering a panic
//!   report are swallowed, so reports can never loop.
//!
//! ## Diagram
//! ```text
//!    publish(&Event)
//!        │  snapshot registry
//!        ├──► observer A.on_event(&ev).await
//!        ├──► observer B.on_event(&ev).await   (panic → caught, noted)
//!        └──► observer C.on_event(&ev).await
//!        │
//!        └──► for each noted panic: deliver ObserverPanicked (no re-report)
//! ```

use std::sync::{Arc, RwLock};

use futures::FutureExt;

use super::event::Event;
use crate::observers::Observe;

/// Ordered registry of observers with synchronous fan-out.
///
/// The registry is the only resource shared across runs; the lock is held
/// only to snapshot or mutate the list, never across an observer call.
#[derive(Default)]
pub struct Bus {
    observers: RwLock<Vec<Arc<dyn Observe>>>,
}

impl Bus {
    /// Creates a new bus with no observers attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer at the end of the registry.
    ///
    /// Attaching a handle that is already present (same `Arc`) is a no-op;
    /// the first attachment's position is kept. Returns `true` when the
    /// observer was newly attached.
    pub fn attach(&self, observer: Arc<dyn Observe>) -> bool {
        let mut observers = write_lock(&self.observers);
        if observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            return false;
        }
        observers.push(observer);
        true
    }

    /// Detaches an observer if present; a no-op (not an error) otherwise.
    ///
    /// Returns `true` when the observer was found and removed. A fan-out
    /// already in progress still delivers its event to the detached
    /// observer (snapshot semantics).
    pub fn detach(&self, observer: &Arc<dyn Observe>) -> bool {
        let mut observers = write_lock(&self.observers);
        let before = observers.len();
        observers.retain(|o| !Arc::ptr_eq(o, observer));
        observers.len() != before
    }

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        read_lock(&self.observers).len()
    }

    /// True if no observers are attached.
    pub fn is_empty(&self) -> bool {
        read_lock(&self.observers).is_empty()
    }

    /// Delivers the event to every currently-attached observer, in
    /// attachment order, then reports any caught panics through the bus.
    pub async fn publish(&self, event: &Event) {
        let panics = self.deliver(event).await;
        for (observer, info) in panics {
            let report = Event::observer_panicked(observer, info);
            // Panics inside panic handling are dropped on the floor.
            let _ = self.deliver(&report).await;
        }
    }

    /// One ordered fan-out pass over a snapshot of the registry.
    ///
    /// Returns the (observer, panic message) pairs caught along the way;
    /// nothing is collected while delivering a panic report itself.
    async fn deliver(&self, event: &Event) -> Vec<(&'static str, String)> {
        let snapshot: Vec<Arc<dyn Observe>> = read_lock(&self.observers).clone();

        let mut panics = Vec::new();
        for observer in snapshot {
            let fut = observer.on_event(event);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                if event.is_observer_panic() {
                    continue;
                }
                let info = {
                    let any = &*panic_err;
                    if let Some(msg) = any.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = any.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    }
                };
                panics.push((observer.name(), info));
            }
        }
        panics
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records which observer saw which event label, in delivery order.
    struct Tap {
        tag: &'static str,
        seen: Arc<Mutex<Vec<(&'static str, &'static str)>>>,
    }

    #[async_trait]
    impl Observe for Tap {
        async fn on_event(&self, event: &Event) {
            self.seen
                .lock()
                .unwrap()
                .push((self.tag, event.kind.as_label()));
        }

        fn name(&self) -> &'static str {
            self.tag
        }
    }

    struct Exploder;

    #[async_trait]
    impl Observe for Exploder {
        async fn on_event(&self, _event: &Event) {
            panic!("observer blew up");
        }

        fn name(&self) -> &'static str {
            "exploder"
        }
    }

    fn tap(tag: &'static str, seen: &Arc<Mutex<Vec<(&'static str, &'static str)>>>) -> Arc<Tap> {
        Arc::new(Tap {
            tag,
            seen: Arc::clone(seen),
        })
    }

    #[tokio::test]
    async fn attach_is_idempotent_per_handle() {
        let bus = Bus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let a: Arc<dyn Observe> = tap("a", &seen);

        assert!(bus.attach(a.clone()));
        assert!(!bus.attach(a.clone()));
        assert_eq!(bus.len(), 1);

        bus.publish(&Event::new(EventKind::RunStarted)).await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn detach_absent_is_noop() {
        let bus = Bus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let stranger: Arc<dyn Observe> = tap("stranger", &seen);
        assert!(!bus.detach(&stranger));
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn fan_out_follows_attachment_order() {
        let bus = Bus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.attach(tap("first", &seen));
        bus.attach(tap("second", &seen));
        bus.attach(tap("third", &seen));

        bus.publish(&Event::new(EventKind::RunStarted)).await;

        let order: Vec<&'static str> = seen.lock().unwrap().iter().map(|(t, _)| *t).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn panicking_observer_does_not_block_the_rest() {
        let bus = Bus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        bus.attach(tap("before", &seen));
        bus.attach(Arc::new(Exploder));
        bus.attach(tap("after", &seen));

        bus.publish(&Event::new(EventKind::RunStarted)).await;

        let events = seen.lock().unwrap().clone();
        // Both well-behaved observers saw the original event, and both saw
        // the panic report that followed it.
        assert!(events.contains(&("before", "run_started")));
        assert!(events.contains(&("after", "run_started")));
        assert!(events.contains(&("before", "observer_panicked")));
        assert!(events.contains(&("after", "observer_panicked")));
    }

    /// Detaches a target observer the first time it sees an event.
    struct Saboteur {
        bus: Arc<Bus>,
        target: Mutex<Option<Arc<dyn Observe>>>,
    }

    #[async_trait]
    impl Observe for Saboteur {
        async fn on_event(&self, _event: &Event) {
            if let Some(target) = self.target.lock().unwrap().take() {
                self.bus.detach(&target);
            }
        }

        fn name(&self) -> &'static str {
            "saboteur"
        }
    }

    #[tokio::test]
    async fn detach_during_dispatch_keeps_snapshot_delivery() {
        let bus = Arc::new(Bus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let victim: Arc<dyn Observe> = tap("victim", &seen);

        bus.attach(Arc::new(Saboteur {
            bus: Arc::clone(&bus),
            target: Mutex::new(Some(victim.clone())),
        }));
        bus.attach(victim);
        bus.attach(tap("tail", &seen));

        // The in-flight fan-out still reaches the victim (snapshot), and
        // the tail observer attached after it is unaffected.
        bus.publish(&Event::new(EventKind::RunStarted)).await;
        {
            let events = seen.lock().unwrap().clone();
            assert!(events.contains(&("victim", "run_started")));
            assert!(events.contains(&("tail", "run_started")));
        }

        // The next publish no longer reaches the detached victim.
        bus.publish(&Event::new(EventKind::RunCompleted)).await;
        let events = seen.lock().unwrap().clone();
        assert!(!events.contains(&("victim", "run_completed")));
        assert!(events.contains(&("tail", "run_completed")));
    }
}
