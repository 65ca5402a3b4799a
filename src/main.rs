//! Coleta Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod form;
mod models;
mod pages;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Coleta starting, API at {}", config::API_BASE_URL);
    mount_to_body(App);
}
