//! Sikt - marketing site for an AI-driven SEO agency
//!
//! A single-page Leptos application with three views, scroll-reveal
//! sections and Google sign-in, rendered on the server and hydrated in the
//! browser.

#![recursion_limit = "4096"]

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
