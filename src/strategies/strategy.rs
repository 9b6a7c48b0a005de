//! # The delay-strategy contract.

use std::sync::Arc;
use std::time::Duration;

use crate::items::Playable;

/// Shared handle to a strategy.
pub type StrategyRef = Arc<dyn DelayStrategy>;

/// # Maps an item and its position to a display delay.
///
/// ## Contract
/// - **Pure**: deterministic for a fixed `(item, index)` pair, with no
///   internal state.
/// - **Total**: returns a delay for every item; malformed bases are clamped
///   by the strategy rather than rejected at fire time.
/// - [`name`](DelayStrategy::name) / [`description`](DelayStrategy::description)
///   are static metadata, used as registry ids and for logs.
pub trait DelayStrategy: Send + Sync + std::fmt::Debug + 'static {
    /// Computes the display delay for the item at the given input index.
    fn compute(&self, item: &dyn Playable, index: usize) -> Duration;

    /// Short stable identifier (used as the registry id).
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;
}
