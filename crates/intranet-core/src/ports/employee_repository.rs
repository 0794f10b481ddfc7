//! Employee repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Employee, NewEmployee};

/// Repository for employee persistence.
///
/// Employees carry an optional foreign key to a department; implementations
/// surface foreign-key failures as [`RepositoryError::Constraint`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees.
    async fn get_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Fetch a single employee by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;

    /// Insert a new employee and return it with its assigned id.
    async fn add(&self, employee: NewEmployee) -> Result<Employee, RepositoryError>;

    /// Update an existing employee. Returns `false` if no row matched.
    async fn update(&self, id: i64, employee: NewEmployee) -> Result<bool, RepositoryError>;

    /// Delete an employee by id. Returns `false` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
