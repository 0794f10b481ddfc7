//! Product handlers - catalog CRUD.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use intranet_core::domain::{NewProduct, Product};

use crate::error::HttpError;
use crate::state::AppState;

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, HttpError> {
    Ok(Json(state.core.products().list().await?))
}

/// Get a product by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, HttpError> {
    state
        .core
        .products()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Product with id {id} not found")))
}

/// Create a product. Returns 201 with the created entity.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), HttpError> {
    let created = state.core.products().create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product. Returns 204, or 404 if it does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<NewProduct>,
) -> Result<StatusCode, HttpError> {
    if state.core.products().update(id, req).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Product with id {id} not found")))
    }
}

/// Delete a product. Returns 204, or 404 if it does not exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    if state.core.products().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(HttpError::NotFound(format!("Product with id {id} not found")))
    }
}
