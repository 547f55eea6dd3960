//! OpenAPI document for the crime routes

use axum::Json;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::types::CrimeEvent;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crime API",
        version = "1.0.0",
        description = "Crime API that returns latest crime data from Brottsplatskartan"
    ),
    paths(
        handlers::list_crimes,
        handlers::list_headlines,
        handlers::search_crimes,
        handlers::latest_crime
    ),
    components(schemas(CrimeEvent))
)]
pub struct ApiDoc;

/// Serve the generated document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
