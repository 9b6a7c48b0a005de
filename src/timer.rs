//! # Timer port.
//!
//! The cohort never calls wall-clock timers directly; it sleeps through
//! [`Sleep`], so a test double (or tokio's paused clock reaching through
//! [`TokioSleep`]) can drive time deterministically.

use std::time::Duration;

use async_trait::async_trait;

/// Capability to wait out a duration.
#[async_trait]
pub trait Sleep: Send + Sync + 'static {
    /// Completes after `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by [`tokio::time::sleep`].
///
/// Under a paused tokio clock (`start_paused`), sleeps resolve in virtual
/// time, which is what the integration tests rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

#[async_trait]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_in_virtual_time() {
        let begin = Instant::now();
        TokioSleep.sleep(Duration::from_millis(250)).await;
        assert!(begin.elapsed() >= Duration::from_millis(250));
    }
}
