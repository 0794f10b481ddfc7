//! Axum web adapter for the intranet API.
//!
//! Routes, handlers, HTTP error mapping, and the composition root that
//! wires the `SQLite` implementations into `AppCore`.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, build_context, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
