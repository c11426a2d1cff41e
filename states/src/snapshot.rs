//! Read-only state snapshots handed to commands.
//!
//! A dispatch clones every snapshot-capable state (see
//! [`State::snapshot`](crate::State::snapshot)) into a `CommandSnapshot`
//! before the command future is spawned. Commands therefore observe the
//! dispatch-time values and can never race the UI thread; anything they
//! want to change goes back through the [`Updater`](crate::Updater).

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::State;

/// Dispatch-time clones of the registered states, keyed by `TypeId`.
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn new(states: BTreeMap<TypeId, Box<dyn Any + Send>>) -> Self {
        Self { states }
    }

    /// Typed access to a snapshot entry.
    ///
    /// Panics when `T` was never registered or does not implement
    /// `snapshot`; both are wiring bugs in the dispatch site, not runtime
    /// conditions.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    /// Like [`Self::state`], but `None` instead of panicking.
    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Number of captured states. Mostly useful in tests.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
