//! Route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{convert_routes, form_routes, health_routes};
use crate::openapi::openapi_json;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML form
        .merge(form_routes())
        // Health check
        .nest("/health", health_routes())
        // JSON API
        .nest("/api", convert_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
