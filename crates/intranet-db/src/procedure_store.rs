//! `SQLite` implementation of the `ProcedureStore` trait.
//!
//! Named procedures live in the `procedures` table: one row per procedure,
//! `body` holding a single SQL statement. The calling convention mirrors
//! the legacy stored-procedure contract: the body receives the full request
//! JSON as its one `?1` parameter and returns its entire result as one
//! scalar JSON string (first column of the first row).
//!
//! "Procedure not found" is classified by the catalog row lookup, not by
//! matching backend error text, so the classification is stable across
//! `SQLite` versions and locales.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use intranet_core::ports::{ProcedureStore, ProcedureStoreError};

/// `SQLite` procedure store.
pub struct SqliteProcedureStore {
    pool: SqlitePool,
}

impl SqliteProcedureStore {
    /// Create a new `SQLite` procedure store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Define or replace a procedure.
    ///
    /// Operational tooling and tests use this; the gateway itself never
    /// writes to the catalog.
    pub async fn define(&self, name: &str, body: &str) -> Result<(), ProcedureStoreError> {
        sqlx::query(
            "INSERT INTO procedures (name, body) VALUES (?, ?) \
             ON CONFLICT(name) DO UPDATE SET body = excluded.body",
        )
        .bind(name)
        .bind(body)
        .execute(&self.pool)
        .await
        .map_err(|e| ProcedureStoreError::Store(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ProcedureStore for SqliteProcedureStore {
    async fn call(
        &self,
        target: &str,
        payload: &str,
    ) -> Result<Option<String>, ProcedureStoreError> {
        // Connection is held for this call only; reuse is the pool's concern.
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ProcedureStoreError::Store(e.to_string()))?;

        let body: Option<String> = sqlx::query_scalar("SELECT body FROM procedures WHERE name = ?")
            .bind(target)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| ProcedureStoreError::Store(e.to_string()))?;

        let Some(body) = body else {
            return Err(ProcedureStoreError::TargetNotFound(target.to_string()));
        };

        tracing::debug!(procedure = target, "executing procedure body");

        let row = sqlx::query(&body)
            .bind(payload)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| ProcedureStoreError::Store(e.to_string()))?;

        match row {
            Some(row) => row
                .try_get::<Option<String>, _>(0)
                .map_err(|e| ProcedureStoreError::Store(e.to_string())),
            None => Ok(None),
        }
    }

    async fn list_targets(&self) -> Result<Vec<String>, ProcedureStoreError> {
        sqlx::query_scalar("SELECT name FROM procedures ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProcedureStoreError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn store() -> SqliteProcedureStore {
        SqliteProcedureStore::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn echo_procedure_returns_payload_verbatim() {
        let store = store().await;
        let payload = r#"{"FromApi":"Echo","x":1}"#;
        let result = store.call("P_ECHO", payload).await.unwrap();
        assert_eq!(result.as_deref(), Some(payload));
    }

    #[tokio::test]
    async fn unknown_target_is_classified_without_string_matching() {
        let store = store().await;
        let err = store.call("P_FOOBAR", "{}").await.unwrap_err();
        match err {
            ProcedureStoreError::TargetNotFound(target) => assert_eq!(target, "P_FOOBAR"),
            other => panic!("expected TargetNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn null_scalar_comes_back_as_none() {
        let store = store().await;
        store.define("P_NOTHING", "SELECT nullif(?1, ?1)").await.unwrap();
        let result = store.call("P_NOTHING", "{}").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn zero_row_body_comes_back_as_none() {
        let store = store().await;
        store.define("P_EMPTY", "SELECT ?1 WHERE 1 = 0").await.unwrap();
        let result = store.call("P_EMPTY", "{}").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn broken_body_surfaces_as_store_error() {
        let store = store().await;
        store.define("P_BROKEN", "SELECT FROM").await.unwrap();
        let err = store.call("P_BROKEN", "{}").await.unwrap_err();
        assert!(matches!(err, ProcedureStoreError::Store(_)));
    }

    #[tokio::test]
    async fn define_replaces_and_list_targets_reports_catalog() {
        let store = store().await;
        store.define("P_ONCE", "SELECT ?1").await.unwrap();
        store
            .define("P_ONCE", "SELECT json_array() WHERE json_valid(?1)")
            .await
            .unwrap();

        let targets = store.list_targets().await.unwrap();
        assert!(targets.contains(&"P_ONCE".to_string()));
        assert!(targets.contains(&"P_PING".to_string()));

        let result = store.call("P_ONCE", "{}").await.unwrap();
        assert_eq!(result.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn seeded_ping_procedure_responds() {
        let store = store().await;
        let result = store.call("P_PING", r#"{"FromApi":"ping"}"#).await.unwrap();
        assert_eq!(result.as_deref(), Some(r#"["pong"]"#));
    }
}
