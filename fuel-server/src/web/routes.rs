//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::domain::{StationDetails, StationHistory, StationRadiusHit, StationSummary};
use crate::gateway::{GatewayError, RadiusQuery, UPSTREAM_UNAVAILABLE};
use crate::upstream::Upstream;

use super::dto::*;
use super::state::AppState;

/// Message for a path id that is not an unsigned integer.
const INVALID_ID: &str = "Validation failed (numeric string is expected)";

/// Create the application router.
pub fn create_router<U: Upstream + 'static>(state: AppState<U>) -> Router {
    Router::new()
        .route("/", get(keep_alive))
        .route("/health", get(health))
        .route("/estaciones/detalles/:station_id", get(station_details::<U>))
        .route("/estaciones/historico/:station_id", get(station_history::<U>))
        .route(
            "/estaciones/municipio/:municipality_id",
            get(stations_by_municipality::<U>),
        )
        .route("/estaciones/radio", get(stations_in_radius::<U>))
        .route(
            "/estaciones/radio/detalles",
            get(stations_in_radius_with_details::<U>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The configured CORS origin is not a valid header value.
#[derive(Debug, thiserror::Error)]
#[error("invalid CORS origin: {0}")]
pub struct CorsError(String);

/// CORS policy for the browser frontend at `origin`.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, CorsError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| CorsError(origin.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Keep-alive endpoint for hosting platforms that idle the process.
async fn keep_alive() -> &'static str {
    "API de estaciones activa"
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>().map_err(|_| AppError::BadRequest {
        message: INVALID_ID.to_string(),
    })
}

/// Current details and prices for one station.
async fn station_details<U: Upstream>(
    State(state): State<AppState<U>>,
    Path(station_id): Path<String>,
) -> Result<Json<StationDetails>, AppError> {
    let station_id = parse_id(&station_id)?;
    Ok(Json(state.gateway.get_details(station_id).await?))
}

/// Price history for one station.
async fn station_history<U: Upstream>(
    State(state): State<AppState<U>>,
    Path(station_id): Path<String>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<StationHistory>, AppError> {
    let station_id = parse_id(&station_id)?;
    let Query(params) = params?;
    let history = state
        .gateway
        .get_history(station_id, params.inicio.as_deref(), params.fin.as_deref())
        .await?;
    Ok(Json(history))
}

/// Stations in a municipality.
async fn stations_by_municipality<U: Upstream>(
    State(state): State<AppState<U>>,
    Path(municipality_id): Path<String>,
) -> Result<Json<Vec<StationSummary>>, AppError> {
    let municipality_id = parse_id(&municipality_id)?;
    Ok(Json(state.gateway.get_by_municipality(municipality_id).await?))
}

/// Stations within a radius of a point.
async fn stations_in_radius<U: Upstream>(
    State(state): State<AppState<U>>,
    query: Result<Query<RadiusQuery>, QueryRejection>,
) -> Result<Json<Vec<StationRadiusHit>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.gateway.get_by_radius(&query).await?))
}

/// Stations within a radius, each enriched with its details.
async fn stations_in_radius_with_details<U: Upstream>(
    State(state): State<AppState<U>>,
    query: Result<Query<RadiusQuery>, QueryRejection>,
) -> Result<Json<Vec<StationDetails>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.gateway.get_by_radius_with_details(&query).await?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::BadRequest(message) => AppError::BadRequest { message },
            GatewayError::NotFound(message) => AppError::NotFound { message },
            GatewayError::UpstreamUnavailable => AppError::Internal {
                message: UPSTREAM_UNAVAILABLE.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            info!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or_default().to_string(),
        });
        (status, body).into_response()
    }
}
