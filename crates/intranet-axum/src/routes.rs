//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the entity CRUD routes (nested under `/api`).
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::remove),
        )
        .route(
            "/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/employees/{id}",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::remove),
        )
        .route(
            "/departments",
            get(handlers::departments::list).post(handlers::departments::create),
        )
        .route(
            "/departments/{id}",
            get(handlers::departments::get)
                .put(handlers::departments::update)
                .delete(handlers::departments::remove),
        )
}

/// Create the main Axum router with all routes.
///
/// The legacy gateway lives under `/common` (route names preserved from the
/// original deployment); entity CRUD is nested under `/api`.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .route("/common/hello", get(handlers::common::hello))
        .route("/common/call", post(handlers::common::call_procedure))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
