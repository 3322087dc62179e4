//! Simple Mercari Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod loader;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting app");
    mount_to_body(App);
}
