//! SSR host router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered Leptos shell for every app route and the
//! compiled WASM/CSS bundle under `/pkg`. The job-search backend is a separate
//! service; nothing here proxies to it.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

pub const DEFAULT_PORT: u16 = 3000;

/// Leptos options plus the router serving them.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<(LeptosOptions, Router), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    Ok((leptos_options, router))
}

/// Listening port from a raw `PORT` value.
///
/// # Errors
///
/// Returns an error when the value is present but not a valid port.
pub fn parse_port(raw: Option<&str>) -> Result<u16, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|e| format!("invalid PORT {value:?}: {e}")),
    }
}
