//! Plain-text error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const CITY_REQUIRED: &str = "City query parameter is required";
pub const CRIME_FETCH_FAILED: &str = "An error occurred while fetching crime data.";
pub const LOCATIONS_FETCH_FAILED: &str = "An error occurred while fetching crime locations data.";

/// Error returned by a handler. Rendered as `text/plain`, unlike the JSON
/// success bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub fn city_required() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: CITY_REQUIRED,
        }
    }

    pub fn upstream(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
