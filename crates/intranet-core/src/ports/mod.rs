//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - The procedure store is intent-based: call a named procedure with one
//!   opaque text parameter, get back at most one scalar JSON string

pub mod department_repository;
pub mod employee_repository;
pub mod procedure_store;
pub mod product_repository;

use std::sync::Arc;
use thiserror::Error;

pub use department_repository::DepartmentRepository;
pub use employee_repository::EmployeeRepository;
pub use procedure_store::{ProcedureStore, ProcedureStoreError};
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use procedure_store::MockProcedureStore;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives in
/// `intranet-core` so that `AppCore` can accept it without depending on
/// `intranet-db`.
#[derive(Clone)]
pub struct Repos {
    /// Product repository for catalog CRUD.
    pub products: Arc<dyn ProductRepository>,
    /// Employee repository for staff CRUD.
    pub employees: Arc<dyn EmployeeRepository>,
    /// Department repository for org-unit CRUD.
    pub departments: Arc<dyn DepartmentRepository>,
}

impl Repos {
    /// Create a new `Repos` container.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            products,
            employees,
            departments,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.,
/// sqlx errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Top-level error for core service operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
