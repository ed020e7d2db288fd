//! Authpanel - login / sign up page
//!
//! A two-panel auth page backed by a mock user store in the browser's
//! `localStorage`, built with Leptos and WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
