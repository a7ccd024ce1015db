//! Ecoleta Frontend Entry Point

mod models;
mod config;
mod deadline;
mod state;
mod submission;
mod store;
mod api;
mod geolocation;
mod leaflet;
mod context;
mod controller;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));

    let cfg = config::config();
    log::info!("Ecoleta starting, api at {}", cfg.api_url);

    mount_to_body(App);
}
