//! Department handlers - org-unit CRUD.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use intranet_core::domain::{Department, NewDepartment};

use crate::error::HttpError;
use crate::state::AppState;

/// List all departments.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Department>>, HttpError> {
    Ok(Json(state.core.departments().list().await?))
}

/// Get a department by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Department>, HttpError> {
    state
        .core
        .departments()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Department with id {id} not found")))
}

/// Create a department. Returns 201 with the created entity.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewDepartment>,
) -> Result<(StatusCode, Json<Department>), HttpError> {
    let created = state.core.departments().create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a department. Returns 204, or 404 if it does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<NewDepartment>,
) -> Result<StatusCode, HttpError> {
    if state.core.departments().update(id, req).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Department with id {id} not found")))
    }
}

/// Delete a department. Returns 204, or 404 if it does not exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if state.core.departments().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Department with id {id} not found")))
    }
}
