//! A small typed state container for egui apps.
//!
//! States are plain structs registered in a [`StateCtx`] and looked up by
//! type. Async work is expressed as [`Command`]s: dispatch clones the
//! states a command needs into a [`CommandSnapshot`], spawns the command's
//! future, and the command queues its writes through an [`Updater`]. The
//! frame loop drains the queue with [`StateCtx::sync`], applying writes in
//! arrival order on the UI thread, which is the only thread that ever
//! touches the live states.

mod command;
mod ctx;
mod runtime;
mod snapshot;
mod state;
mod time;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use time::Time;
pub use updater::Updater;
