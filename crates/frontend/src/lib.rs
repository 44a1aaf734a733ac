//! MYST Lounge single-page site (Leptos CSR).
//!
//! Built with Trunk; `start` runs as soon as the wasm module is instantiated.

pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", e).into());
    }

    if shared::api_utils::gemini_api_key().is_none() {
        log::warn!("built without GEMINI_API_KEY, lab widgets use their offline fallbacks");
    }
    log::info!("🏠 mounting MYST Lounge");

    leptos::mount::mount_to_body(app::App);
}
