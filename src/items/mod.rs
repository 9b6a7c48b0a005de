//! # Item abstractions.
//!
//! This module provides the types a caller hands to the scheduler:
//! - [`Playable`] - trait for items that can be played back
//! - [`Item`] - plain named value with a no-op display
//! - [`ItemFn`] - closure-backed item with a custom display hook
//! - [`PlayableRef`] - shared handle to an item (`Arc<dyn Playable>`)

mod item;
mod item_fn;
mod playable;

pub use item::Item;
pub use item_fn::ItemFn;
pub use playable::{Playable, PlayableRef};
