//! Factory for constructing the repository set and procedure store.
//!
//! Adapters call into this from their composition roots so that no handler
//! code ever touches a pool directly.

use std::sync::Arc;

use sqlx::SqlitePool;

use intranet_core::ports::Repos;

use crate::procedure_store::SqliteProcedureStore;
use crate::repositories::{
    SqliteDepartmentRepository, SqliteEmployeeRepository, SqliteProductRepository,
};

/// Factory for core dependencies backed by `SQLite`.
pub struct CoreFactory;

impl CoreFactory {
    /// Build the full repository set over a shared pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteProductRepository::new(pool.clone())),
            Arc::new(SqliteEmployeeRepository::new(pool.clone())),
            Arc::new(SqliteDepartmentRepository::new(pool)),
        )
    }

    /// Build the procedure store over a shared pool.
    pub fn procedure_store(pool: SqlitePool) -> Arc<SqliteProcedureStore> {
        Arc::new(SqliteProcedureStore::new(pool))
    }
}
