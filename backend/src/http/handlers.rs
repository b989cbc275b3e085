//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the dashboard in
//! the shared state. Lock guards never outlive the synchronous part of a handler.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::dto::{
    DetailView, ExportQuery, HealthResponse, LoadReceipt, LoadScheduleRequest, SnapshotResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::parsing::FormatError;
use crate::services::PreparedLoad;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let loaded = state.dashboard.read().is_loaded();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        loaded,
    }))
}

// =============================================================================
// Schedule
// =============================================================================

/// POST /v1/schedule
///
/// Parse an uploaded payload and, on success, replace the displayed schedule.
/// Parsing happens before the write lock is taken; a rejected payload leaves the
/// current schedule untouched.
pub async fn load_schedule(
    State(state): State<AppState>,
    Json(request): Json<LoadScheduleRequest>,
) -> HandlerResult<LoadReceipt> {
    let format = match (request.resolve_format(), &request.file_name) {
        (Some(format), _) => format,
        (None, Some(name)) => return Err(FormatError::UnsupportedFormat(name.clone()).into()),
        (None, None) => {
            return Err(AppError::BadRequest(
                "either format or file_name is required".to_string(),
            ))
        }
    };

    let prepared = PreparedLoad::parse(&request.content, format, request.display_name())?;
    let receipt = state.dashboard.write().commit(prepared);

    info!(
        "Schedule '{}' committed as revision {}",
        receipt.source_name, receipt.revision
    );
    Ok(Json(receipt))
}

/// GET /v1/schedule
///
/// The rendered surface: stats fields, grid cells and the open detail view.
pub async fn get_schedule(State(state): State<AppState>) -> HandlerResult<SnapshotResponse> {
    let dashboard = state.dashboard.read();

    Ok(Json(SnapshotResponse {
        revision: dashboard.revision(),
        loaded: dashboard.is_loaded(),
        surface: dashboard.surface().clone(),
    }))
}

/// GET /v1/schedule/slots/{position}
///
/// Open the detail view for one slot.
pub async fn select_slot(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> HandlerResult<DetailView> {
    state
        .dashboard
        .write()
        .select_slot(position)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No slot at position {}", position)))
}

/// DELETE /v1/schedule/detail
pub async fn dismiss_detail(State(state): State<AppState>) -> StatusCode {
    state.dashboard.write().dismiss_detail();
    StatusCode::NO_CONTENT
}

/// GET /v1/schedule/export?format=text|json|csv
pub async fn export_schedule(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format = query.format.unwrap_or_default();

    let body = {
        let dashboard = state.dashboard.read();
        let schedule = dashboard
            .schedule()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::NotFound("No schedule loaded".to_string()))?;
        format.render(schedule)?
    };

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
