//! # client
//!
//! Leptos + WASM frontend for the AyuSmat digital health ID platform.
//! Marketing pages, registration and login flows, and four role-specific
//! dashboards, all backed by the `session` crate's browser-persisted
//! mock session.
//!
//! No page talks to a network: every "backend" interaction is the
//! simulated session layer plus hardcoded sample content.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
