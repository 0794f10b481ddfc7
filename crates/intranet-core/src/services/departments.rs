//! Department service - org-unit operations.

use crate::domain::{Department, NewDepartment};
use crate::ports::{CoreError, DepartmentRepository};
use std::sync::Arc;

/// Service for department CRUD operations.
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    /// Create a new department service.
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    /// List all departments.
    pub async fn list(&self) -> Result<Vec<Department>, CoreError> {
        self.repo.get_all().await.map_err(CoreError::from)
    }

    /// Fetch a single department, `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Department>, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Create a department and return it with its assigned id.
    pub async fn create(&self, department: NewDepartment) -> Result<Department, CoreError> {
        let created = self.repo.add(department).await?;
        tracing::info!(id = created.id, name = %created.name, "department created");
        Ok(created)
    }

    /// Update a department. Returns `false` if it does not exist.
    pub async fn update(&self, id: i64, department: NewDepartment) -> Result<bool, CoreError> {
        self.repo.update(id, department).await.map_err(CoreError::from)
    }

    /// Delete a department. Returns `false` if it does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, CoreError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!(id, "department deleted");
        }
        Ok(deleted)
    }
}
