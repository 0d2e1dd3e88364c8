//! # client
//!
//! Leptos + WASM storefront: the shop listing, the authentication dashboard,
//! and the session store that keeps the signed-in user across reloads.
//!
//! The session store (`state::session`) is framework-free and unit-tested
//! natively; pages and components reach it through `SessionContext`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    log::info!("storefront hydrating");
    leptos::mount::hydrate_body(app::App);
}
