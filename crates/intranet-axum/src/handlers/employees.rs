//! Employee handlers - staff CRUD.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use intranet_core::domain::{Employee, NewEmployee};

use crate::error::HttpError;
use crate::state::AppState;

/// List all employees.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, HttpError> {
    Ok(Json(state.core.employees().list().await?))
}

/// Get an employee by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, HttpError> {
    state
        .core
        .employees()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Employee with id {id} not found")))
}

/// Create an employee. Returns 201 with the created entity.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), HttpError> {
    let created = state.core.employees().create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an employee. Returns 204, or 404 if it does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<NewEmployee>,
) -> Result<StatusCode, HttpError> {
    if state.core.employees().update(id, req).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Employee with id {id} not found")))
    }
}

/// Delete an employee. Returns 204, or 404 if it does not exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if state.core.employees().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Employee with id {id} not found")))
    }
}
