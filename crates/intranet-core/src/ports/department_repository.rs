//! Department repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Department, NewDepartment};

/// Repository for department persistence.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// List all departments.
    async fn get_all(&self) -> Result<Vec<Department>, RepositoryError>;

    /// Fetch a single department by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Department>, RepositoryError>;

    /// Insert a new department and return it with its assigned id.
    async fn add(&self, department: NewDepartment) -> Result<Department, RepositoryError>;

    /// Update an existing department. Returns `false` if no row matched.
    async fn update(&self, id: i64, department: NewDepartment) -> Result<bool, RepositoryError>;

    /// Delete a department by id. Returns `false` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
