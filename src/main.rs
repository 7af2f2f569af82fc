//! Game Shelf Frontend Entry Point

mod models;
mod commands;
mod backend;
mod store;
mod search;
mod drag;
mod reconcile;
mod tasks;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
