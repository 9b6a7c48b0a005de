//! # Strategy registry - string-keyed runtime selection.
//!
//! [`StrategyRegistry`] maps stable identifiers to shared strategy
//! instances so callers can pick a strategy from configuration or user
//! input at run time.
//!
//! ## Rules
//! - [`register`](StrategyRegistry::register) overwrites any existing entry
//!   for the id and returns the replaced handle.
//! - [`get`](StrategyRegistry::get) fails with
//!   [`ScheduleError::UnknownStrategy`] when no entry matches.
//! - Lookups hand out the registered `Arc` itself — a pure id → instance
//!   mapping. Strategies are stateless, so sharing one instance across
//!   runs is sound; there is no per-lookup construction to cache.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ScheduleError;
use crate::strategies::{
    strategy::StrategyRef, FixedDelay, GeometricDelay, LinearDelay, ValueDelay,
};

/// String-keyed map of shared delay strategies.
#[derive(Default)]
pub struct StrategyRegistry {
    entries: HashMap<String, StrategyRef>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in strategies pre-registered under
    /// their `name()` ids: `value`, `fixed`, `linear`, `geometric`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("value", Arc::new(ValueDelay));
        registry.register("fixed", Arc::new(FixedDelay::default()));
        registry.register("linear", Arc::new(LinearDelay::default()));
        registry.register("geometric", Arc::new(GeometricDelay::default()));
        registry
    }

    /// Registers a strategy under the given id, overwriting any existing
    /// entry. Returns the replaced handle, if there was one.
    pub fn register(&mut self, id: impl Into<String>, strategy: StrategyRef) -> Option<StrategyRef> {
        self.entries.insert(id.into(), strategy)
    }

    /// Looks up the strategy registered under `id`.
    pub fn get(&self, id: &str) -> Result<StrategyRef, ScheduleError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownStrategy { id: id.to_string() })
    }

    /// True if a strategy is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the sorted list of registered ids.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
