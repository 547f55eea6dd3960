//! HTTP API server

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod docs;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Build the API router using the provided application state.
///
/// Cross-origin requests are accepted from any origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/crime", get(handlers::list_crimes))
        .route("/crimes/locations", get(handlers::list_headlines))
        .route("/crimes/search", get(handlers::search_crimes))
        .route("/crimes/latest", get(handlers::latest_crime))
        .route(OPENAPI_PATH, get(docs::openapi_json))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
