//! # Core observer trait
//!
//! `Observe` is the extension point for plugging custom event handlers into
//! the runtime. Handlers are awaited one at a time during the bus fan-out,
//! in attachment order.
//!
//! ## Contract
//! - Handlers run on the publisher's task: a slow handler delays the
//!   observers attached after it, so keep per-event work short and push
//!   heavy I/O elsewhere.
//! - Panics are caught per observer and reported through the bus; they
//!   never abort the run nor skip the remaining observers.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event observers.
///
/// Implementations keep whatever state they accumulate private; the same
/// event instance is shared by reference across the whole fan-out.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs and panic reports).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
