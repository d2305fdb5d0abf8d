//! # portal-client
//!
//! Leptos + WASM frontend for the invoice portal.
//!
//! This crate owns the browser-side session: role registry, persisted
//! session record, the auth context with its expiry loop, route guards and
//! the shared chrome. Feature `hydrate` builds the browser bundle; feature
//! `ssr` exposes `app::shell` and `app::App` to the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
