//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type and mappings from the core
//! error taxonomy to status codes and RFC 7807-style problem bodies
//! (`{title, detail, status}`). Internal failure detail is logged here and
//! never leaks into response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use intranet_core::gateway::GatewayError;
use intranet_core::ports::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Valid request shape, but the named capability does not exist.
    #[error("Invalid API call: {0}")]
    InvalidCall(String),

    /// Internal server error. The payload is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Problem-details response body.
#[derive(Serialize)]
struct ProblemBody {
    title: String,
    detail: String,
    status: u16,
}

const GENERIC_DETAIL: &str = "An error occurred while processing the request.";

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, "Not Found", detail),
            Self::BadRequest(detail) => (StatusCode::BAD_REQUEST, "Bad Request", detail),
            Self::InvalidCall(detail) => (StatusCode::BAD_REQUEST, "Invalid API Call", detail),
            Self::Internal(detail) => {
                // Full detail goes to the log, a generic line to the caller.
                tracing::error!(error = %detail, "internal error surfaced to HTTP boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.",
                    GENERIC_DETAIL.to_string(),
                )
            }
        };

        let body = ProblemBody {
            title: title.to_string(),
            detail,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<GatewayError> for HttpError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::MalformedPayload(detail) => {
                Self::BadRequest(format!("Invalid JSON request body: {detail}"))
            }
            GatewayError::MissingRoutingField => Self::BadRequest(err.to_string()),
            GatewayError::TargetNotFound(target) => {
                Self::InvalidCall(format!("The target '{target}' was not found."))
            }
            GatewayError::Store(detail) => Self::Internal(detail),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}
