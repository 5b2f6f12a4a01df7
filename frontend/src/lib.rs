//! Client core for the leave desk: REST client, session boundary, leave
//! store, dashboard view models and history export.

pub mod api;
pub mod config;
pub mod history;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Leavedesk frontend (wasm)");

    wasm_bindgen_futures::spawn_local(async move {
        config::init_from_origin().await;
        log::info!("Runtime config initialized");
    });
}
