//! Task spawning that works the same from web and native builds.

use std::future::Future;

/// Spawn a fire-and-forget future. On the web it is detached from the component
/// tree, so it still runs if the spawning component unmounts first.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
