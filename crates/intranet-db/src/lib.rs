//! `SQLite` implementations of the intranet-core ports.
//!
//! This crate owns all `sqlx` usage: entity repositories, the procedure
//! store backing the generic gateway, and schema setup.

#![deny(unsafe_code)]

pub mod factory;
pub mod procedure_store;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export the pool type so adapters don't need a direct sqlx dependency
pub use sqlx::SqlitePool;

// Re-export concrete implementations
pub use procedure_store::SqliteProcedureStore;
pub use repositories::{
    SqliteDepartmentRepository, SqliteEmployeeRepository, SqliteProductRepository,
};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
