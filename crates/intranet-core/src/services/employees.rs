//! Employee service - staff operations.

use crate::domain::{Employee, NewEmployee};
use crate::ports::{CoreError, EmployeeRepository};
use std::sync::Arc;

/// Service for employee CRUD operations.
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service.
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// List all employees.
    pub async fn list(&self) -> Result<Vec<Employee>, CoreError> {
        self.repo.get_all().await.map_err(CoreError::from)
    }

    /// Fetch a single employee, `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Employee>, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create an employee and return it with its assigned id.
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, CoreError> {
        let created = self.repo.add(employee).await?;
        tracing::info!(id = created.id, email = %created.email, "employee created");
        Ok(created)
    }

    /// Update an employee. Returns `false` if it does not exist.
    pub async fn update(&self, id: i64, employee: NewEmployee) -> Result<bool, CoreError> {
        self.repo.update(id, employee).await.map_err(CoreError::from)
    }

    /// Delete an employee. Returns `false` if it does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!(id, "employee deleted");
        }
        Ok(deleted)
    }
}
