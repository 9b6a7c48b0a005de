//! # Function-backed item (`ItemFn`)
//!
//! [`ItemFn`] wraps a closure `F: Fn() -> Fut`, producing a fresh display
//! future each time the item's timer fires. There is no hidden shared
//! state; if the closure needs any, it captures an `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use playcast::{ItemFn, PlayableRef, PlaybackError};
//!
//! let item: PlayableRef = ItemFn::arc("flaky", 10, || async {
//!     Err(PlaybackError::display("flaky", "device unavailable"))
//! });
//! assert_eq!(item.name(), "flaky");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PlaybackError;
use crate::items::playable::{Playable, PlayableRef};

/// Function-backed item implementation.
///
/// Wraps a closure that *creates* a new display future per firing.
#[derive(Debug)]
pub struct ItemFn<F> {
    name: Cow<'static, str>,
    basis: u64,
    f: F,
}

impl<F> ItemFn<F> {
    /// Creates a new function-backed item.
    ///
    /// Prefer [`ItemFn::arc`] when you immediately need a [`PlayableRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, basis: u64, f: F) -> Self {
        Self {
            name: name.into(),
            basis,
            f,
        }
    }
}

impl<F, Fut> ItemFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), PlaybackError>> + Send + 'static,
{
    /// Creates the item and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, basis: u64, f: F) -> PlayableRef {
        Arc::new(Self::new(name, basis, f))
    }
}

#[async_trait]
impl<F, Fut> Playable for ItemFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), PlaybackError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn delay_basis(&self) -> u64 {
        self.basis
    }

    async fn display(&self) -> Result<(), PlaybackError> {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn display_runs_the_closure() {
        let calls = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&calls);
        let item = ItemFn::arc("counted", 5, move || {
            let counted = Arc::clone(&counted);
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });

        assert!(item.display().await.is_ok());
        assert!(item.display().await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(item.delay_basis(), 5);
    }

    #[tokio::test]
    async fn display_errors_surface() {
        let item = ItemFn::arc("broken", 1, || async {
            Err(PlaybackError::display("broken", "boom"))
        });
        let err = item.display().await.unwrap_err();
        assert_eq!(err.as_label(), "playback_display_failed");
    }
}
