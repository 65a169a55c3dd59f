//! Bot analytics dashboard and honeypot contact form (Leptos CSR).

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Runs once when Trunk loads the wasm bundle.
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    console_error_panic_hook::set_once();
    log::info!("bot analytics frontend starting");

    leptos::mount::mount_to_body(app::App);
}
