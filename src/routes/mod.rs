//! Route assembly: common routes plus one route set per configured resource.

pub mod common;
pub mod resource;

pub use common::{common_routes, not_found};
pub use resource::{bind_resource, resource_routes};

use crate::config::AppConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router for `config`, serving from `state.pool`.
/// Oversized bodies are rejected inside the body extractor so they get the JSON error shape.
pub fn app_routes(config: &AppConfig, state: AppState) -> Router {
    let mut app = common_routes(state.clone(), config.root_redirect.as_deref());
    for r in &config.resources {
        app = app.merge(bind_resource(r, &state.pool));
    }
    app.fallback(not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(config.body_limit)),
    )
}
