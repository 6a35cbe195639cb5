//! # portal-client
//!
//! Leptos + WASM frontend for the internship placement portal. Students,
//! companies, and administrators sign in, manage their profiles, publish and
//! browse job offers, and track applications against a remote REST API.
//!
//! This crate contains pages, components, reactive session state, the typed
//! endpoint services, and the authenticated HTTP core with its time-boxed
//! GET response cache. Role-gated navigation is enforced by
//! [`components::require_role`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
