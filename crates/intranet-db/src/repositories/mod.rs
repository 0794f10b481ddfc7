//! `SQLite` repository implementations.

pub mod sqlite_department_repository;
pub mod sqlite_employee_repository;
pub mod sqlite_product_repository;

pub use sqlite_department_repository::SqliteDepartmentRepository;
pub use sqlite_employee_repository::SqliteEmployeeRepository;
pub use sqlite_product_repository::SqliteProductRepository;

use intranet_core::ports::RepositoryError;

/// Map a sqlx error onto the domain repository error taxonomy.
///
/// Constraint violations (unique email, department foreign key) surface as
/// `Constraint`; everything else is an opaque storage failure.
pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation
            | sqlx::error::ErrorKind::NotNullViolation
            | sqlx::error::ErrorKind::CheckViolation => {
                RepositoryError::Constraint(db.message().to_string())
            }
            _ => RepositoryError::Storage(err.to_string()),
        },
        _ => RepositoryError::Storage(err.to_string()),
    }
}
