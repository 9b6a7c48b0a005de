//! # The playable-item contract.
//!
//! A [`Playable`] has a stable name, a numeric delay basis, and an async
//! [`display`](Playable::display) hook executed when its timer fires. Items
//! are immutable once scheduled; the common handle type is [`PlayableRef`],
//! an `Arc<dyn Playable>` suitable for sharing across the runtime and for
//! carrying inside events.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PlaybackError;

/// Shared handle to an item.
pub type PlayableRef = Arc<dyn Playable>;

/// # An item that can be scheduled for timed display.
///
/// The [`delay_basis`](Playable::delay_basis) is the per-item number that
/// value-derived strategies feed on (milliseconds for the built-in
/// [`ValueDelay`](crate::ValueDelay)); strategies that ignore the item
/// (fixed, index-derived) never read it.
///
/// # Example
/// ```
/// use playcast::{Playable, PlaybackError};
/// use async_trait::async_trait;
///
/// struct Chime;
///
/// #[async_trait]
/// impl Playable for Chime {
///     fn name(&self) -> &str { "chime" }
///
///     fn delay_basis(&self) -> u64 { 250 }
///
///     async fn display(&self) -> Result<(), PlaybackError> {
///         // ring the bell...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Playable: Send + Sync + 'static {
    /// Returns a stable, human-readable item name.
    fn name(&self) -> &str;

    /// Returns the numeric basis value-derived strategies compute from,
    /// in milliseconds.
    fn delay_basis(&self) -> u64;

    /// Performs the item's display work when its timer fires.
    ///
    /// An error here is fatal to the run: the scheduler transitions to
    /// `Failed` and cancels not-yet-fired items. The default does nothing,
    /// which leaves "display" entirely to the observers of the
    /// `ItemDisplayed` event.
    async fn display(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
