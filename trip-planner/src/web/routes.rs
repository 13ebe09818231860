//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::costs::apply_costs;
use crate::domain::{DomainError, DriverStatus, Timestamp, Trip};
use crate::planner::{RestPolicy, RouteFilter, next_available, select_compatible_routes};
use crate::schedule::{append_totals_row, compute_totals};
use crate::tables::{load_routes_reader, schedule_to_csv_string};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", get(get_schedule))
        .route("/schedule.csv", get(download_schedule))
        .route("/trips", post(add_trip))
        .route("/availability", get(availability))
        .route("/routes/compatible", post(compatible_routes))
        .route("/driver", get(get_driver).put(put_driver))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map an optional delimiter character to a byte.
fn delimiter_byte(delimiter: Option<char>) -> Result<u8, AppError> {
    match delimiter {
        None => Ok(b','),
        Some(c) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        Some(c) => Err(AppError::BadRequest {
            message: format!("Unsupported delimiter: {c:?}"),
        }),
    }
}

/// The costed schedule with its totals row.
async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let mut session = state.session.lock().await;
    session.schedule.compute_costs(&state.config.costs);

    let table = session.schedule.to_table();
    let totals = compute_totals(&table);
    let rows = if table.is_empty() {
        table
    } else {
        append_totals_row(&table)
    };

    Json(ScheduleResponse {
        rows,
        totals,
        next_available: session.schedule.next_available(&state.config.rest),
    })
}

/// Download the schedule, totals row included, as CSV.
async fn download_schedule(
    State(state): State<AppState>,
    Query(query): Query<CsvQuery>,
) -> Result<Response, AppError> {
    let delimiter = delimiter_byte(query.delimiter)?;

    let mut session = state.session.lock().await;
    session.schedule.compute_costs(&state.config.costs);
    let table = append_totals_row(&session.schedule.to_table());
    drop(session);

    let body = schedule_to_csv_string(&table, delimiter).map_err(|e| AppError::Internal {
        message: format!("CSV export failed: {e}"),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"schedule.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Add a trip to the schedule.
async fn add_trip(
    State(state): State<AppState>,
    Json(req): Json<TripRequest>,
) -> Result<(StatusCode, Json<Trip>), AppError> {
    let mut trip = req.into_trip()?;
    apply_costs(&mut trip, &state.config.costs);

    let mut session = state.session.lock().await;
    session.schedule.add_trip(trip.clone());
    info!(code = %trip.code(), trips = session.schedule.len(), "trip added");

    Ok((StatusCode::CREATED, Json(trip)))
}

/// When the driver may start the next trip.
async fn availability(State(state): State<AppState>) -> Result<Json<AvailabilityResponse>, AppError> {
    let last_arrival = {
        let session = state.session.lock().await;
        session.schedule.last_trip().ok_or_else(empty_schedule)?.arrival()
    };
    let rest = state.config.rest;

    Ok(Json(AvailabilityResponse {
        last_arrival,
        unload_minutes: rest.unload_minutes,
        rest_hours: rest.rest_hours,
        next_available: earliest_departure(last_arrival, &rest)?,
    }))
}

/// Rank uploaded candidate routes (CSV body) against current availability.
async fn compatible_routes(
    State(state): State<AppState>,
    Query(query): Query<CompatibleRoutesQuery>,
    body: String,
) -> Result<Json<CompatibleRoutesResponse>, AppError> {
    let delimiter = delimiter_byte(query.delimiter)?;
    let routes = load_routes_reader(body.as_bytes(), delimiter).map_err(|e| AppError::BadRequest {
        message: format!("Invalid routes CSV: {e}"),
    })?;

    let last_arrival = state
        .session
        .lock()
        .await
        .schedule
        .last_trip()
        .map(Trip::arrival)
        .ok_or_else(empty_schedule)?;
    let available_from = earliest_departure(last_arrival, &state.config.rest)?;

    let filter = RouteFilter {
        min_payout: query.min_payout,
        min_rate_per_km: query.min_rate_per_km,
        min_distance_km: query.min_distance_km,
        top_n: query.top_n.unwrap_or(state.config.top_n),
    };
    let selected = select_compatible_routes(&routes, available_from, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CompatibleRoutesResponse {
        available_from,
        candidates: routes.len(),
        routes: selected,
    }))
}

/// Current driver status.
async fn get_driver(State(state): State<AppState>) -> Json<DriverStatus> {
    Json(state.session.lock().await.driver.clone())
}

/// Replace the driver status.
async fn put_driver(
    State(state): State<AppState>,
    Json(status): Json<DriverStatus>,
) -> Json<DriverStatus> {
    let mut session = state.session.lock().await;
    session.driver = status;
    Json(session.driver.clone())
}

fn earliest_departure(last_arrival: Timestamp, rest: &RestPolicy) -> Result<Timestamp, AppError> {
    next_available(last_arrival, rest.unload_minutes, rest.rest_hours).ok_or_else(|| {
        AppError::BadRequest {
            message: format!(
                "Rest policy of {} min unload and {} h rest runs past the supported calendar",
                rest.unload_minutes, rest.rest_hours
            ),
        }
    })
}

fn empty_schedule() -> AppError {
    AppError::NotFound {
        message: "Schedule is empty: add a trip first".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
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
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
