//! Procedure store trait definition.
//!
//! The procedure store is the backing system behind the generic gateway:
//! named procedures callable with a single text parameter, each returning
//! its entire result as one scalar JSON string. Implementations open any
//! connection they need for the duration of a single call only; pooling is
//! their own concern, never the caller's.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a procedure store.
#[derive(Debug, Error)]
pub enum ProcedureStoreError {
    /// No procedure is defined under the requested target name.
    ///
    /// This is a structured classification (the store checks its own
    /// catalog), not a string match against a backend error message.
    #[error("procedure '{0}' is not defined")]
    TargetNotFound(String),

    /// Any other backing-store failure (connectivity, bad procedure body,
    /// constraint violation). Never retried by the caller.
    #[error("procedure store failure: {0}")]
    Store(String),
}

/// Backing store exposing named procedures.
///
/// Calling convention: exactly one input parameter carrying the full JSON
/// envelope as text, exactly one scalar output containing a JSON string.
/// `Ok(None)` means the procedure produced no scalar; callers must treat
/// that as an empty result, not a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcedureStore: Send + Sync {
    /// Invoke the procedure named `target`, passing `payload` as its single
    /// parameter. Performs exactly one remote invocation.
    async fn call(
        &self,
        target: &str,
        payload: &str,
    ) -> Result<Option<String>, ProcedureStoreError>;

    /// Names of all procedures the store currently defines.
    ///
    /// Used at startup to populate the gateway's command table.
    async fn list_targets(&self) -> Result<Vec<String>, ProcedureStoreError>;
}
