//! # jobpilot
//!
//! Leptos + WASM frontend for the job-search and résumé-analysis assistant.
//! All business logic lives in an external backend; this crate holds the
//! pages, components, client-side state, REST helpers, and the session flows
//! (bootstrap, login/register, logout) that gate navigation.
//!
//! The `hydrate` feature builds the browser bundle; the `ssr` feature builds
//! the Axum host that server-renders the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
