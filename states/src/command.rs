//! The `Command` trait: a dispatchable unit of async work.
//!
//! A command is registered once on the [`StateCtx`](crate::StateCtx) and
//! dispatched by type. `run` receives the dispatch-time
//! [`CommandSnapshot`], an [`Updater`] for queueing state writes, and a
//! cancellation token. The returned future is spawned on the shared
//! runtime and must be `Send`; it reports nothing back directly, results
//! travel through the updater.
//!
//! The token is part of the contract so a command *may* observe
//! cancellation, but nothing in this crate ever cancels one: a dispatched
//! command runs to completion even if every caller has lost interest.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// Boxed `Send` future returned by [`Command::run`].
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

pub trait Command: Any {
    fn run(
        &self,
        snapshot: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
