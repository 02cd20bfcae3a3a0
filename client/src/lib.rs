//! # client
//!
//! Leptos + WASM frontend for the marine natural product library and the
//! MCBW shell (`--features mcbw`).
//!
//! This crate contains the route table and navigation hooks, i18n, the
//! token-based auth session with its storage and HTTP seams, pages, and the
//! navigation bar. The host server renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod routes;
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
