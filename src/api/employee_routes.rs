//! Employee directory API endpoints.
//!
//! ## Endpoints
//!
//! - `POST /api/employee` - create an employee
//! - `GET /api/employee/:id` - fetch an employee
//! - `PUT /api/employee/:id` - replace an employee
//! - `GET /api/employee/numberOfReports/:id` - reporting structure
//! - `POST /api/employee/compensation` - record a compensation data point
//! - `GET /api/employee/compensation/:id` - compensation history
//! - `GET /api/health` - liveness probe

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use crate::error::DirectoryError;
use crate::models::{Compensation, Employee, NewCompensation, NewEmployee};
use crate::service::EmployeeService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

/// Service failure mapped to an HTTP response.
///
/// Everything a [`DirectoryError`] carries is a server-side fault: cycles
/// and dangling reports are corrupted data, unknown-employee references are
/// integrity violations, store errors are infrastructure. All of them
/// surface as 500 with an `error` body; absence is handled separately as
/// 404 by the individual handlers.
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("employee {id} not found") })),
    )
        .into_response()
}

// ============================================================================
// Router Creation
// ============================================================================

/// Create the employee directory router.
pub fn create_employee_router(state: AppState) -> Router {
    Router::new()
        // Employee CRUD
        .route("/api/employee", post(create_employee))
        .route(
            "/api/employee/:id",
            get(get_employee).put(replace_employee),
        )
        // Reporting structure
        .route(
            "/api/employee/numberOfReports/:id",
            get(get_reporting_structure),
        )
        // Compensation
        .route("/api/employee/compensation", post(create_compensation))
        .route("/api/employee/compensation/:id", get(get_compensations))
        // Health
        .route("/api/health", get(health_check))
        .with_state(state)
}

// ============================================================================
// Route Handlers
// ============================================================================

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

/// POST /api/employee
async fn create_employee(
    State(state): State<AppState>,
    Json(fields): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state.service.create_employee(fields).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employee/:id
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.service.employee_by_id(&id).await? {
        Some(employee) => Ok(Json(employee).into_response()),
        None => Ok(not_found(&id)),
    }
}

/// PUT /api/employee/:id
///
/// Full replacement. The id in the path wins; any id in the body is
/// ignored.
async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<NewEmployee>,
) -> Result<Response, ApiError> {
    match state.service.replace_employee(&id, fields).await? {
        Some(employee) => Ok(Json(employee).into_response()),
        None => Ok(not_found(&id)),
    }
}

/// GET /api/employee/numberOfReports/:id
///
/// Resolves the total number of direct and indirect reports under the
/// employee. A cyclic reporting chain in the data surfaces as 500.
async fn get_reporting_structure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.service.reporting_structure(&id).await? {
        Some(structure) => Ok(Json(structure).into_response()),
        None => Ok(not_found(&id)),
    }
}

/// POST /api/employee/compensation
async fn create_compensation(
    State(state): State<AppState>,
    Json(fields): Json<NewCompensation>,
) -> Result<(StatusCode, Json<Compensation>), ApiError> {
    let compensation = state.service.create_compensation(fields).await?;
    Ok((StatusCode::CREATED, Json(compensation)))
}

/// GET /api/employee/compensation/:id
async fn get_compensations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Compensation>>, ApiError> {
    Ok(Json(state.service.compensations_for(&id).await?))
}
