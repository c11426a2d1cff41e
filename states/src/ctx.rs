//! `StateCtx`: the single writable home of every state in one app session.
//!
//! ## Why this file exists
//!
//! The UI needs one place that owns application state, and commands need a
//! way to feed results back without sharing references across threads. The
//! context gives both: states live in a `TypeId`-keyed map owned by the UI
//! thread; commands get dispatch-time clones and queue their writes through
//! the [`Updater`]; the frame loop calls [`StateCtx::sync`] to fold queued
//! writes back in, in arrival order.
//!
//! ## How to use
//!
//! ```ignore
//! let mut ctx = StateCtx::new();
//! ctx.add_state(AppConfig::default());
//! ctx.record_command(FetchUsersCommand);
//!
//! ctx.dispatch::<FetchUsersCommand>();   // spawns the async work
//! // ... each frame:
//! ctx.sync();                            // applies completed writes
//! ```
//!
//! Lookups by type panic when the type was never registered: registration
//! happens once at startup, so a miss is a wiring bug and not something to
//! limp past.

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{Command, CommandSnapshot, State, Updater, runtime};

pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queue_tx: flume::Sender<Update>,
    queue_rx: flume::Receiver<Update>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (queue_tx, queue_rx) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue_tx,
            queue_rx,
            wake: None,
        }
    }

    /// Register a state value. Registering the same type twice replaces the
    /// previous value.
    pub fn add_state<T: State>(&mut self, state: T) {
        if self
            .states
            .insert(TypeId::of::<T>(), Box::new(state))
            .is_some()
        {
            log::warn!("StateCtx: {} registered twice, replaced", type_name::<T>());
        }
    }

    /// Register a command for later [`Self::dispatch`] by type.
    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Install the wake callback invoked whenever a command queues a write.
    /// The UI hooks its repaint request here so command completions render
    /// without waiting for the next input event.
    pub fn set_waker(&mut self, wake: impl Fn() + Send + Sync + 'static) {
        self.wake = Some(Arc::new(wake));
    }

    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutate a state in place, immediately, on the caller's thread. This
    /// is the synchronous counterpart to [`Updater::apply`]; dispatch sites
    /// use it to stage inputs and mark pending status before dispatching.
    pub fn update<T: State>(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(self.state_mut::<T>());
    }

    /// A write handle for this context. Cheap to clone; safe to move into
    /// spawned futures.
    pub fn updater(&self) -> Updater {
        Updater::new(self.queue_tx.clone(), self.wake.clone())
    }

    /// Snapshot the current states and spawn the registered command `C`.
    ///
    /// The command observes dispatch-time values only; its writes land on
    /// the next [`Self::sync`] after the response arrives. Dispatching an
    /// unregistered command panics.
    pub fn dispatch<C: Command>(&self) {
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .unwrap_or_else(|| panic!("Command {} is not recorded", type_name::<C>()));

        let mut captured: BTreeMap<TypeId, Box<dyn Any + Send>> = BTreeMap::new();
        for (type_id, state) in &self.states {
            if let Some(boxed) = state.snapshot() {
                captured.insert(*type_id, boxed);
            }
        }

        log::debug!("StateCtx: dispatching {}", type_name::<C>());
        let future = command.run(
            CommandSnapshot::new(captured),
            self.updater(),
            CancellationToken::new(),
        );
        runtime::spawn(future);
    }

    /// Drain the write queue and apply every entry, in send order, against
    /// the current states. Returns the number of writes applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.queue_rx.try_recv() {
            match update {
                Update::Set(type_id, boxed) => match self.states.get_mut(&type_id) {
                    Some(state) => state.assign_box(boxed),
                    None => log::warn!("StateCtx: set for an unregistered state discarded"),
                },
                Update::Apply(type_id, mutate) => match self.states.get_mut(&type_id) {
                    Some(state) => mutate(state.as_mut()),
                    None => log::warn!("StateCtx: apply for an unregistered state discarded"),
                },
            }
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandFuture;
    use crate::state::state_assign_impl;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Source {
        label: String,
    }

    impl State for Source {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Mirror {
        label: String,
    }

    impl State for Mirror {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    /// Copies `Source`'s dispatch-time label into `Mirror`.
    struct EchoCommand;

    impl Command for EchoCommand {
        fn run(
            &self,
            snapshot: CommandSnapshot,
            updater: Updater,
            _cancel: CancellationToken,
        ) -> CommandFuture {
            let label = snapshot.state::<Source>().label.clone();
            Box::pin(async move {
                updater.set(Mirror { label });
            })
        }
    }

    async fn sync_until(ctx: &mut StateCtx, done: impl Fn(&StateCtx) -> bool) {
        for _ in 0..200 {
            ctx.sync();
            if done(ctx) {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("queued writes never arrived");
    }

    #[test]
    fn test_state_registration_and_mutation() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Source::default());

        ctx.update::<Source>(|source| source.label = "updated".to_string());
        assert_eq!(ctx.state::<Source>().label, "updated");
        assert!(ctx.try_state::<Mirror>().is_none(), "Mirror was never registered");
    }

    #[test]
    fn test_reregistration_replaces_value() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Source {
            label: "first".to_string(),
        });
        ctx.add_state(Source {
            label: "second".to_string(),
        });
        assert_eq!(ctx.state::<Source>().label, "second");
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_missing_state_panics() {
        let ctx = StateCtx::new();
        let _ = ctx.state::<Source>();
    }

    #[test]
    #[should_panic(expected = "is not recorded")]
    fn test_missing_command_panics() {
        let ctx = StateCtx::new();
        ctx.dispatch::<EchoCommand>();
    }

    #[tokio::test]
    async fn test_dispatch_reaches_mirror_through_queue() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Source {
            label: "hello".to_string(),
        });
        ctx.add_state(Mirror::default());
        ctx.record_command(EchoCommand);

        ctx.dispatch::<EchoCommand>();
        sync_until(&mut ctx, |ctx| ctx.state::<Mirror>().label == "hello").await;
    }

    #[tokio::test]
    async fn test_command_sees_dispatch_time_snapshot() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Source {
            label: "before".to_string(),
        });
        ctx.add_state(Mirror::default());
        ctx.record_command(EchoCommand);

        ctx.dispatch::<EchoCommand>();
        // Mutating after dispatch must not leak into the running command.
        ctx.update::<Source>(|source| source.label = "after".to_string());

        sync_until(&mut ctx, |ctx| !ctx.state::<Mirror>().label.is_empty()).await;
        assert_eq!(
            ctx.state::<Mirror>().label,
            "before",
            "command must observe the dispatch-time value"
        );
    }
}
