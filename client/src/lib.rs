//! # storefront-client
//!
//! Leptos + WASM frontend for the That Girl Planner digital-planner store.
//!
//! This crate contains the header, the home page, the login and sign-up
//! flows, the session store and the REST client for the storefront backend.
//! The `storefront` binary renders it on the server; the `hydrate` feature
//! builds the browser side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
