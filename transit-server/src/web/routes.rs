//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, NaiveTime};
use tracing::{debug, error, warn};

use crate::domain::Itinerary;
use crate::planner::{Planner, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations/search", get(search_stations))
        .route("/journey/plan", post(plan_journey))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name or code.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let stations = state
        .directory
        .search(&req.q, limit)
        .into_iter()
        .map(StationSearchResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Plan journey options between two stations.
///
/// A well-formed request always succeeds: endpoints that resolve to no
/// station, or a pair with no route within the transfer budget, give
/// `success: true` with an empty route list. Only malformed input is a
/// client error.
async fn plan_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    // Parse JSON manually so the body can be logged on failure
    let req: PlanJourneyRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "malformed plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let reference = match &req.time {
        Some(text) => {
            NaiveTime::parse_from_str(text, "%H:%M").map_err(|_| AppError::BadRequest {
                message: format!("Invalid time (expected HH:MM): {text}"),
            })?
        }
        None => Local::now().time(),
    };

    let (Some(origin), Some(destination)) = (
        state.directory.resolve(&req.origin),
        state.directory.resolve(&req.destination),
    ) else {
        debug!(
            origin = %req.origin,
            destination = %req.destination,
            "endpoint did not resolve to a station",
        );
        return Ok(Json(PlanJourneyResponse {
            success: true,
            routes: Vec::new(),
        }));
    };
    let (origin, destination) = (origin.code, destination.code);

    let budget = state.config.clamp_max_transfers(req.max_transfers);
    let key = state.cache.key(origin, destination, budget, reference);
    if let Some(routes) = state.cache.get(&key).await {
        return Ok(Json(respond(&routes)));
    }

    let planner = Planner::new(
        &state.graph,
        &state.config,
        &state.fares,
        state.timetable.as_ref(),
    );
    // The directory and the graph come from the same model, so a
    // station that resolved but is missing from the graph is an
    // internal inconsistency, not a client mistake.
    let routes = planner
        .plan(origin, destination, Some(budget), reference)
        .map(Arc::new)
        .map_err(|e: SearchError| AppError::Internal {
            message: e.to_string(),
        })?;

    state.cache.insert(key, routes.clone()).await;
    Ok(Json(respond(&routes)))
}

fn respond(routes: &[Itinerary]) -> PlanJourneyResponse {
    PlanJourneyResponse {
        success: true,
        routes: routes.iter().map(ItineraryResult::from_itinerary).collect(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => error!(%status, %message, "request failed"),
            _ => debug!(%status, %message, "request rejected"),
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
