//! `SQLite` implementation of the `DepartmentRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use intranet_core::domain::{Department, NewDepartment};
use intranet_core::ports::{DepartmentRepository, RepositoryError};

use super::map_sqlx_err;

/// `SQLite` implementation of the `DepartmentRepository` trait.
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    /// Create a new `SQLite` department repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Department {
    Department {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
    }
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepository {
    async fn get_all(&self) -> Result<Vec<Department>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, location FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Department>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, location FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(row.as_ref().map(map_row))
    }

    async fn add(&self, department: NewDepartment) -> Result<Department, RepositoryError> {
        let result = sqlx::query("INSERT INTO departments (name, location) VALUES (?, ?)")
            .bind(&department.name)
            .bind(&department.location)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(Department {
            id: result.last_insert_rowid(),
            name: department.name,
            location: department.location,
        })
    }

    async fn update(&self, id: i64, department: NewDepartment) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE departments SET name = ?, location = ? WHERE id = ?")
            .bind(&department.name)
            .bind(&department.location)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn crud_round_trip() {
        let repo = SqliteDepartmentRepository::new(setup_test_database().await.unwrap());

        let created = repo
            .add(NewDepartment {
                name: "Engineering".to_string(),
                location: Some("Floor 3".to_string()),
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        assert!(
            repo.update(
                created.id,
                NewDepartment {
                    name: "Engineering".to_string(),
                    location: None,
                },
            )
            .await
            .unwrap()
        );
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().location,
            None
        );

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
