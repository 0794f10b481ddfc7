//! Generic procedure gateway: dispatch resolution and execution.
//!
//! The gateway accepts an arbitrary JSON envelope, derives a procedure
//! target from its routing field, and forwards the **original text** of the
//! envelope to the procedure store as one opaque parameter. The result
//! comes back as a single JSON string and is returned verbatim.
//!
//! Wire conventions preserved from the legacy system:
//!
//! - the routing field is named `FromApi`;
//! - the target is the routing value upper-cased and prefixed with `P_`
//!   (`GetOrders` becomes `P_GETORDERS`);
//! - the forwarded payload is byte-for-byte the inbound body. The resolver
//!   parses only to validate; it never re-serializes.
//!
//! Unlike the legacy system, targets are checked against a command table
//! ([`ProcedureRegistry`]) populated at startup, so unknown names are
//! rejected before any store call.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::ports::{ProcedureStore, ProcedureStoreError};

/// JSON field whose value selects the procedure to invoke.
pub const ROUTING_FIELD: &str = "FromApi";

/// Fixed prefix applied to the upper-cased routing value.
pub const TARGET_PREFIX: &str = "P_";

/// Sentinel returned when a procedure produces no scalar: an empty JSON
/// array, never null and never an error.
pub const EMPTY_RESULT: &str = "[]";

/// Failures of the dispatch pipeline.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The body is not valid JSON, or not a JSON object.
    #[error("invalid request envelope: {0}")]
    MalformedPayload(String),

    /// The routing field is absent, not a string, empty, or whitespace.
    #[error("missing '{ROUTING_FIELD}' field in the request JSON to determine the procedure")]
    MissingRoutingField,

    /// No procedure exists under the derived target name.
    #[error("invalid API call: the target '{0}' was not found")]
    TargetNotFound(String),

    /// The backing store failed for any other reason. Never retried.
    #[error("procedure store failure: {0}")]
    Store(String),
}

impl GatewayError {
    /// Stable name for log lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "malformed_payload",
            Self::MissingRoutingField => "missing_routing_field",
            Self::TargetNotFound(_) => "target_not_found",
            Self::Store(_) => "store_error",
        }
    }
}

/// A fully-resolved procedure invocation.
///
/// `target` is always derived, never caller-supplied verbatim; only the
/// routing suffix comes from the caller. `payload` is the entire original
/// JSON text, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Derived procedure name (`P_` + upper-cased routing value).
    pub target: String,
    /// The routing value as the caller sent it (for logging).
    pub routing: String,
    /// The full original request JSON, forwarded opaquely.
    pub payload: String,
}

/// Resolve a raw JSON envelope into a [`CommandDescriptor`].
///
/// Pure function of its input; no side effects. The payload carried by the
/// descriptor is `raw_json` itself, so forwarding stays byte-for-byte.
pub fn resolve(raw_json: &str) -> Result<CommandDescriptor, GatewayError> {
    let value: serde_json::Value = serde_json::from_str(raw_json)
        .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

    let envelope = value
        .as_object()
        .ok_or_else(|| GatewayError::MalformedPayload("request body must be a JSON object".into()))?;

    let routing = envelope
        .get(ROUTING_FIELD)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if routing.trim().is_empty() {
        return Err(GatewayError::MissingRoutingField);
    }

    Ok(CommandDescriptor {
        target: format!("{TARGET_PREFIX}{}", routing.to_uppercase()),
        routing: routing.to_string(),
        payload: raw_json.to_string(),
    })
}

/// Command table of known procedure targets.
///
/// Populated once at startup from the procedure store; dispatch rejects
/// targets not listed here without touching the store.
#[derive(Debug, Clone, Default)]
pub struct ProcedureRegistry {
    targets: HashSet<String>,
}

impl ProcedureRegistry {
    /// Build a registry from an iterator of target names.
    pub fn new(targets: impl IntoIterator<Item = String>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// Whether `target` is a known procedure.
    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// The dispatch pipeline: resolve, check the command table, execute.
///
/// Stateless across calls; each dispatch owns its parsed envelope and
/// descriptor exclusively. The only suspension point is the store call,
/// and cancellation propagates by dropping the future.
pub struct GatewayService {
    store: Arc<dyn ProcedureStore>,
    registry: ProcedureRegistry,
}

impl GatewayService {
    /// Create a gateway over `store` with a startup-populated `registry`.
    pub fn new(store: Arc<dyn ProcedureStore>, registry: ProcedureRegistry) -> Self {
        Self { store, registry }
    }

    /// The command table this gateway was built with.
    pub const fn registry(&self) -> &ProcedureRegistry {
        &self.registry
    }

    /// Run the full pipeline for one inbound envelope.
    ///
    /// Exactly one store invocation on the success path; zero on any 4xx
    /// path. Every failure is logged with its kind, the derived target when
    /// known, and the routing value, before being returned.
    pub async fn dispatch(&self, raw_json: &str) -> Result<String, GatewayError> {
        let descriptor = match resolve(raw_json) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "gateway dispatch rejected");
                return Err(err);
            }
        };

        if !self.registry.contains(&descriptor.target) {
            tracing::warn!(
                kind = "target_not_found",
                procedure = %descriptor.target,
                routing = %descriptor.routing,
                "gateway dispatch rejected: target not in command table"
            );
            return Err(GatewayError::TargetNotFound(descriptor.target));
        }

        tracing::info!(
            procedure = %descriptor.target,
            routing = %descriptor.routing,
            "dispatching procedure call"
        );

        match self.store.call(&descriptor.target, &descriptor.payload).await {
            Ok(Some(json)) => Ok(json),
            Ok(None) => Ok(EMPTY_RESULT.to_owned()),
            // Second line of defense: the table and the store can drift only
            // if the store is mutated out-of-band after startup.
            Err(ProcedureStoreError::TargetNotFound(target)) => {
                tracing::warn!(
                    kind = "target_not_found",
                    procedure = %target,
                    routing = %descriptor.routing,
                    "procedure disappeared from the store after registration"
                );
                Err(GatewayError::TargetNotFound(target))
            }
            Err(ProcedureStoreError::Store(detail)) => {
                tracing::error!(
                    kind = "store_error",
                    procedure = %descriptor.target,
                    routing = %descriptor.routing,
                    error = %detail,
                    "procedure store failure"
                );
                Err(GatewayError::Store(detail))
            }
        }
    }
}
