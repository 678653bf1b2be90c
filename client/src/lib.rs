//! # client
//!
//! Leptos + WASM frontend for the civic issue reporting portal.
//!
//! This crate contains the page, components, and UI state. Report data lives
//! in the browser's `localStorage` through the `reports` crate's store; the
//! server only renders the shell.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
