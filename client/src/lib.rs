//! # oiltest-client
//!
//! Leptos + WASM frontend for the oil test laboratory administration
//! console. The same crate renders on the server (`ssr`) and hydrates in the
//! browser (`hydrate`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation passes through the route guard, which combines the
//! system-status probe and the session to decide between the bootstrap form,
//! the login page, and the requested screen. All backend calls go through
//! `net::request::ApiClient`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
