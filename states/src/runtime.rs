//! Where command futures actually run.
//!
//! Native builds spawn onto the ambient Tokio runtime when one exists
//! (tests under `#[tokio::test]`) and otherwise onto a small shared
//! runtime owned by this module; eframe's event loop is not async, so the
//! app itself never provides one. On wasm32 everything funnels into the
//! browser microtask queue via `spawn_local`; the futures are `Send` by
//! contract, which `spawn_local` happily accepts.

use crate::command::CommandFuture;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn(future: CommandFuture) {
    use std::sync::OnceLock;

    use tokio::runtime::{Builder, Handle, Runtime};

    static SHARED: OnceLock<Runtime> = OnceLock::new();

    if let Ok(handle) = Handle::try_current() {
        handle.spawn(future);
        return;
    }

    SHARED
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("roster-command")
                .enable_all()
                .build()
                .expect("command runtime must build")
        })
        .spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn(future: CommandFuture) {
    wasm_bindgen_futures::spawn_local(future);
}
