//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API routes with Leptos SSR rendering under a
//! single Axum router. The greeting page is served at `/`, compiled WASM/CSS
//! assets under `/pkg`, and every request is logged through `TraceLayer`.

pub mod greet;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// JSON API routes consumed by the greeting form.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/greet", post(greet::greet))
        .route("/api/hello", get(greet::hello))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Full application router: API routes + Leptos SSR frontend + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(selam_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || selam_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve compiled Leptos assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
