//! Employee API Handlers
//!
//! Every handler validates before touching the store. Store failures are
//! logged with their detail and answered with 500; create is the only one
//! that shows the detail to the client.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeCandidate};

use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::utils::{AppError, AppResult, validate_employee};

const FETCH_FAILED: &str = "Failed to fetch employees";
const UPDATE_FAILED: &str = "Failed to update employee";
const DELETE_FAILED: &str = "Failed to delete employee";

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCandidate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(candidate) = payload?;
    let data = validate_employee(&candidate)?;

    let employee = state.employees.create(data).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create employee");
        AppError::database(format!("Failed to create employee: {e}"))
    })?;

    tracing::info!(id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state
        .employees
        .find_all()
        .await
        .map_err(|e| store_failure(e, FETCH_FAILED))?;
    Ok(Json(employees))
}

/// Replace every field of an employee
///
/// The body is validated before the id is looked at.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeCandidate>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(candidate) = payload?;
    let data = validate_employee(&candidate)?;
    let id = parse_id(&id, UPDATE_FAILED)?;

    let employee = state
        .employees
        .update(id, data)
        .await
        .map_err(|e| store_failure(e, UPDATE_FAILED))?;

    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, DELETE_FAILED)?;

    state
        .employees
        .delete(id)
        .await
        .map_err(|e| store_failure(e, DELETE_FAILED))?;

    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Non-integer ids answer like a store error of the same operation
fn parse_id(raw: &str, message: &'static str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        tracing::warn!(id = %raw, "Invalid employee id");
        AppError::internal(message)
    })
}

fn store_failure(err: RepoError, message: &'static str) -> AppError {
    tracing::error!(error = %err, "{message}");
    AppError::database(message)
}
