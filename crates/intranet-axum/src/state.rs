//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`AxumContext`] carrying the `AppCore` facade.
pub type AppState = Arc<AxumContext>;
