//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the backend proxy and stitches it with Leptos SSR
//! rendering under a single Axum router. Known frontend paths are rendered
//! by Leptos; anything else falls through to the Leptos file-and-error
//! handler, which serves static files or renders the not-found view.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::proxy::{self, ProxyState};

/// Proxy and health routes.
pub(crate) fn api_routes(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*rest}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API proxy + Leptos SSR + compiled bundle under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section) or the HTTP
/// client for the proxy cannot be built.
pub fn app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let proxy_state = ProxyState::new(config).map_err(|e| format!("proxy client: {e}"))?;

    Ok(api_routes(proxy_state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
