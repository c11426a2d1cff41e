//! The `State` trait: a typed unit of application state stored in a
//! [`StateCtx`](crate::StateCtx).
//!
//! Every state is registered once, keyed by its `TypeId`, and accessed
//! through the typed getters on the context. Two optional capabilities are
//! opted into per type:
//!
//! - `snapshot`: a `Send` clone taken when a command snapshot is built.
//!   States that commands read (inputs, config) implement it; purely
//!   UI-facing states leave the default and stay out of snapshots.
//! - `assign_box`: replace the stored value with one produced by a
//!   command through [`Updater::set`](crate::Updater::set). States that are
//!   only ever mutated on the UI thread leave the default.

use std::any::Any;

pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone taken when a command snapshot is built. `None` keeps the state
    /// out of snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace the stored value with a command-produced one. The default
    /// rejects the write; implement via [`state_assign_impl`].
    fn assign_box(&mut self, _new_self: Box<dyn Any + Send>) {
        log::error!(
            "State: {} does not accept whole-value assignment",
            std::any::type_name::<Self>()
        );
    }
}

/// Shared `assign_box` body: downcast and replace, logging on a type
/// mismatch instead of panicking (a mismatch here means a command sent the
/// wrong type, which the queue cannot surface as an error).
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::error!(
            "State: assignment to {} received a different type",
            std::any::type_name::<T>()
        ),
    }
}
