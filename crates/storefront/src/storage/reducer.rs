//! Reducers that persist themselves after every action.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, Persisted};

/// A state value changed only through actions.
///
/// `reduce` must be a pure function of the current state and the action.
/// Only the durable part of the state is persisted: `snapshot` extracts it
/// and `restore` rebuilds a full state from it (recomputing any derived
/// aggregates).
pub trait Reducer: Default {
    /// Actions accepted by `reduce`.
    type Action;

    /// The persisted form of the state.
    type Snapshot: Serialize + DeserializeOwned;

    /// Apply one action.
    fn reduce(&mut self, action: Self::Action);

    /// Durable part of the state, or `None` to remove the stored document.
    fn snapshot(&self) -> Option<Self::Snapshot>;

    /// Rebuild a state from a stored snapshot.
    fn restore(snapshot: Self::Snapshot) -> Self;
}

/// A [`Reducer`] bound to a storage key.
///
/// Hydrated once on construction and written back after every dispatch
/// (last write wins).
#[derive(Debug)]
pub struct PersistedReducer<R: Reducer> {
    state: R,
    slot: Persisted<R::Snapshot>,
}

impl<R: Reducer> PersistedReducer<R> {
    /// Load the state stored under `key`, or start from `R::default()`.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let slot = Persisted::new(store, key);
        let state = slot.load().map(R::restore).unwrap_or_default();
        tracing::debug!(key, "Hydrated state");
        Self { state, slot }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &R {
        &self.state
    }

    /// Apply `action` and persist the result.
    pub fn dispatch(&mut self, action: R::Action) {
        self.state.reduce(action);
        match self.state.snapshot() {
            Some(snapshot) => self.slot.save(&snapshot),
            None => self.slot.clear(),
        }
    }
}
