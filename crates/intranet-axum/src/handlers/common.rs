//! Legacy "Common" handlers: the generic procedure gateway and the hello
//! diagnostic endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;
use crate::state::AppState;

/// Legacy hello endpoint, kept for client smoke tests.
pub async fn hello() -> Json<serde_json::Value> {
    let server_date = chrono::Local::now().format("%Y/%m/%d").to_string();
    Json(serde_json::json!({
        "title": "Hello From Intranet API (Legacy Endpoint)",
        "serverDate": server_date,
    }))
}

/// Generic procedure gateway.
///
/// The body is taken as a raw string, not `Json<Value>`: the envelope is
/// forwarded to the procedure byte-for-byte, and a typed extractor would
/// re-serialize it. The result comes back as a JSON string and is emitted
/// verbatim; the gateway never re-parses it.
pub async fn call_procedure(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, HttpError> {
    let result = state.core.gateway().dispatch(&body).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], result).into_response())
}
