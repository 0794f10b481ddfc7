//! `SQLite` implementation of the `EmployeeRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use intranet_core::domain::{Employee, NewEmployee};
use intranet_core::ports::{EmployeeRepository, RepositoryError};

use super::map_sqlx_err;

/// `SQLite` implementation of the `EmployeeRepository` trait.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new `SQLite` employee repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, first_name, last_name, email, department_id FROM employees";

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Employee {
    Employee {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        department_id: row.get("department_id"),
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn get_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(row.as_ref().map(map_row))
    }

    async fn add(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO employees (first_name, last_name, email, department_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.department_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department_id: employee.department_id,
        })
    }

    async fn update(&self, id: i64, employee: NewEmployee) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE employees SET first_name = ?, last_name = ?, email = ?, department_id = ? \
             WHERE id = ?",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.department_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
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
    use crate::repositories::SqliteDepartmentRepository;
    use crate::setup::setup_test_database;
    use intranet_core::domain::NewDepartment;
    use intranet_core::ports::DepartmentRepository;

    fn sample(email: &str) -> NewEmployee {
        NewEmployee {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            department_id: None,
        }
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteEmployeeRepository::new(pool);

        let created = repo.add(sample("ada@example.com")).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteEmployeeRepository::new(pool);

        repo.add(sample("ada@example.com")).await.unwrap();
        let err = repo.add(sample("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn unknown_department_is_a_constraint_violation() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteEmployeeRepository::new(pool);

        let mut employee = sample("ada@example.com");
        employee.department_id = Some(999);
        let err = repo.add(employee).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn deleting_a_department_clears_the_assignment() {
        let pool = setup_test_database().await.unwrap();
        let departments = SqliteDepartmentRepository::new(pool.clone());
        let employees = SqliteEmployeeRepository::new(pool);

        let department = departments
            .add(NewDepartment {
                name: "Engineering".to_string(),
                location: None,
            })
            .await
            .unwrap();

        let mut employee = sample("ada@example.com");
        employee.department_id = Some(department.id);
        let created = employees.add(employee).await.unwrap();

        assert!(departments.delete(department.id).await.unwrap());
        let fetched = employees.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.department_id, None);
    }
}
