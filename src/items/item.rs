//! # Plain named item.
//!
//! [`Item`] bundles a name with a numeric value and nothing else. Its
//! display hook is the default no-op: displaying a plain item *is* the
//! `ItemDisplayed` event the observers receive.

use std::borrow::Cow;

use crate::items::playable::{Playable, PlayableRef};

/// A plain `(name, value)` item.
///
/// The value doubles as the delay basis, so with the
/// [`ValueDelay`](crate::ValueDelay) strategy an `Item::new("a", 30)` fires
/// after 30ms.
///
/// ## Example
/// ```rust
/// use playcast::{Item, Playable, PlayableRef};
///
/// let item: PlayableRef = Item::arc("alpha", 30);
/// assert_eq!(item.name(), "alpha");
/// assert_eq!(item.delay_basis(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct Item {
    name: Cow<'static, str>,
    value: u64,
}

impl Item {
    /// Creates a new plain item.
    ///
    /// Prefer [`Item::arc`] when you immediately need a [`PlayableRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Creates the item and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, value: u64) -> PlayableRef {
        std::sync::Arc::new(Self::new(name, value))
    }

    /// The wrapped value.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl Playable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn delay_basis(&self) -> u64 {
        self.value
    }
}
