pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = shared::charts::config::install_global_defaults() {
        log::error!("Failed to apply chart defaults: {:?}", err);
    }

    leptos::mount::mount_to_body(app::App);
}
