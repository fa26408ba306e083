//! # coral-client
//!
//! Leptos + WASM session layer for the Coral studio frontend. Owns the
//! signed-in user record and the light/dark theme preference, and publishes
//! both (plus their mutators) to the component tree through a single
//! [`state::session::Session`] context provided by [`app::SessionProvider`].
//!
//! Browser-only behavior (localStorage, navigation, HTTP) is gated behind the
//! `hydrate` feature with inert fallbacks, so the crate also compiles for the
//! SSR server binary.

pub mod app;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
