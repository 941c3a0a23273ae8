//! # site-client
//!
//! Leptos + WASM glue for the personal site. Restores the persisted theme on
//! load and mounts the theme toggle button.
//!
//! The preference logic lives in `util::theme` and is browser-agnostic; the
//! `csr` feature switches `util::browser` from inert stand-ins to `web-sys`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// CSR entry point, called once the page has finished loading.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let theme = util::browser::page_preference().restore_on_load();
    log::debug!("restored theme: {theme:?}");

    leptos::mount::mount_to_body(app::App);
}
