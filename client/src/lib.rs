//! Intern India client: session store, route guards, and page views.
//!
//! ARCHITECTURE
//! ============
//! `state::session` is the single source of truth for who is signed in.
//! `routing` decides guard outcomes from a session snapshot, `components`
//! and `pages` render them, and `net` holds the collaborator contracts with
//! an in-memory implementation.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
