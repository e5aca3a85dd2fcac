//! # portfolio-client
//!
//! Leptos frontend for a single-page portfolio site. Rendered on the server
//! by `portfolio-server` and hydrated in the browser as WASM.
//!
//! The interactive pieces are a persisted light/dark/system theme, scroll
//! triggered reveals, and smooth in-page section navigation.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::reveal::mark_document_scripted();
    leptos::mount::hydrate_body(app::App);
}
