//! # selam-client
//!
//! Leptos + WASM frontend for the greeting application. Renders the greeting
//! form, validates input, and talks to the server's `/api/greet` endpoint.
//!
//! The crate builds in two modes: `ssr` for server-side rendering inside the
//! Axum backend, and `hydrate` for the browser WASM bundle that attaches the
//! live event handlers.

pub mod app;
pub mod net;
pub mod pages;
pub mod status;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
