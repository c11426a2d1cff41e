//! The write half of the state queue.
//!
//! Commands run off the UI thread and never touch states directly. They
//! hold an [`Updater`] and queue either a whole-value set or an in-place
//! mutation; [`StateCtx::sync`](crate::StateCtx::sync) drains the queue on
//! the UI thread once per frame and applies entries in send order. That
//! drain order is the only ordering guarantee: when several commands are in
//! flight, their writes land in response-arrival order.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::State;

/// One queued write.
pub(crate) enum Update {
    /// Replace the whole state value via `State::assign_box`.
    Set(TypeId, Box<dyn Any + Send>),
    /// Mutate the current value in place.
    Apply(TypeId, Box<dyn FnOnce(&mut dyn State) + Send>),
}

/// Cloneable, `Send` handle for queueing state writes from commands.
#[derive(Clone)]
pub struct Updater {
    queue: flume::Sender<Update>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Updater {
    pub(crate) fn new(
        queue: flume::Sender<Update>,
        wake: Option<Arc<dyn Fn() + Send + Sync>>,
    ) -> Self {
        Self { queue, wake }
    }

    /// Queue a whole-value replacement of `T`.
    pub fn set<T>(&self, value: T)
    where
        T: State + Send,
    {
        self.send(Update::Set(TypeId::of::<T>(), Box::new(value)));
    }

    /// Queue an in-place mutation of `T`. The closure runs against the
    /// state as it is when the queue is drained, not as it was when the
    /// command was dispatched.
    pub fn apply<T>(&self, mutate: impl FnOnce(&mut T) + Send + 'static)
    where
        T: State,
    {
        self.send(Update::Apply(
            TypeId::of::<T>(),
            Box::new(move |state: &mut dyn State| {
                match state.as_any_mut().downcast_mut::<T>() {
                    Some(typed) => mutate(typed),
                    None => log::error!(
                        "Updater: apply for {} hit a different type",
                        std::any::type_name::<T>()
                    ),
                }
            }),
        ));
    }

    fn send(&self, update: Update) {
        if self.queue.send(update).is_err() {
            // The context is gone; the command outlived the app session.
            log::warn!("Updater: state context dropped, update discarded");
            return;
        }
        if let Some(wake) = &self.wake {
            wake();
        }
    }
}
