//! API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, CRIME_FETCH_FAILED, LOCATIONS_FETCH_FAILED};
use crate::api::AppState;
use crate::types::{self, CrimeEvent};
use crate::upstream::DEFAULT_LOCATION;

/// Liveness check; never touches the upstream provider
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query string of the city routes. A repeated `city` keeps its first value.
#[derive(Debug, Default)]
pub struct CityQuery {
    pub city: Option<String>,
}

impl CityQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let city = pairs
            .into_iter()
            .find(|(key, _)| key == "city")
            .map(|(_, value)| value);
        Self { city }
    }

    /// The requested city, rejecting a missing or empty value.
    pub fn require_city(self) -> Result<String, ApiError> {
        match self.city {
            Some(city) if !city.is_empty() => Ok(city),
            _ => {
                tracing::warn!("Request rejected: city query parameter is missing");
                Err(ApiError::city_required())
            }
        }
    }
}

/// Retrieve a list of crimes from Helsingborg
#[utoipa::path(
    get,
    path = "/crime",
    responses(
        (status = 200, description = "A list of crimes", body = [CrimeEvent]),
        (status = 500, description = "Server error while fetching crime data")
    )
)]
pub async fn list_crimes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CrimeEvent>>, ApiError> {
    let events = fetch(&state, DEFAULT_LOCATION, CRIME_FETCH_FAILED).await?;
    Ok(Json(events))
}

/// Retrieve crime headlines from Helsingborg
#[utoipa::path(
    get,
    path = "/crimes/locations",
    responses(
        (status = 200, description = "An array of crime headlines", body = [String]),
        (status = 500, description = "Server error while fetching crime locations data")
    )
)]
pub async fn list_headlines(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let events = fetch(&state, DEFAULT_LOCATION, LOCATIONS_FETCH_FAILED).await?;
    Ok(Json(types::headlines(events)))
}

/// Get crimes by city
#[utoipa::path(
    get,
    path = "/crimes/search",
    params(
        ("city" = String, Query, description = "The name of the city to search crimes for")
    ),
    responses(
        (status = 200, description = "A list of crime events from the selected city", body = [CrimeEvent]),
        (status = 400, description = "Missing city query parameter"),
        (status = 500, description = "Server error while fetching crime data")
    )
)]
pub async fn search_crimes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CrimeEvent>>, ApiError> {
    let city = CityQuery::from_pairs(pairs).require_city()?;
    let events = fetch(&state, &city, CRIME_FETCH_FAILED).await?;
    Ok(Json(events))
}

/// Get the latest crime by city
///
/// An empty result from the provider is answered with `null`.
#[utoipa::path(
    get,
    path = "/crimes/latest",
    params(
        ("city" = String, Query, description = "The name of the city to search crimes for")
    ),
    responses(
        (status = 200, description = "Latest crime event from the selected city, or null", body = CrimeEvent),
        (status = 400, description = "Missing city query parameter"),
        (status = 500, description = "Server error while fetching crime data")
    )
)]
pub async fn latest_crime(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Option<CrimeEvent>>, ApiError> {
    let city = CityQuery::from_pairs(pairs).require_city()?;
    let events = fetch(&state, &city, CRIME_FETCH_FAILED).await?;
    Ok(Json(types::latest(events)))
}

/// One upstream call; any failure is logged and collapsed into a 500 carrying
/// `failure_message`.
async fn fetch(
    state: &AppState,
    location: &str,
    failure_message: &'static str,
) -> Result<Vec<CrimeEvent>, ApiError> {
    match state.client.fetch_events(location).await {
        Ok(events) => {
            tracing::info!(location, count = events.len(), "Fetched crime events");
            Ok(events)
        }
        Err(err) => {
            tracing::error!(location, error = %err, "Failed to fetch crime events");
            Err(ApiError::upstream(failure_message))
        }
    }
}
