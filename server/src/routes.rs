//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is a thin SSR host: every application route renders through
//! Leptos, static assets (WASM, CSS, JS) come from the site root's `/pkg`
//! directory, and `/healthz` answers deployment probes. There is no API
//! surface; the platform's "backend" is simulated entirely in the client.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
