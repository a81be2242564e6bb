//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health probe, the compiled Leptos bundle under
//! `/pkg`, static images under `/images`, and server-rendered Leptos routes
//! for every page. Unknown paths are answered by the Leptos wildcard route,
//! which renders the not-found page with a 404 status.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Routes that live outside the Leptos app.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site router: base routes + static files + Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root.display(), assets = %config.assets_dir.display(), "static directories");

    Ok(base_routes()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(config.assets_dir.join("images")))
        .merge(leptos_app(&leptos_options))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Server-rendered Leptos routes, one per route declared by the client app.
fn leptos_app(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(taaru_client::app::App);
    Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || taaru_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
