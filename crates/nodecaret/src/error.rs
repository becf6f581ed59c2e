//! Error types for the engine crate.

use thiserror::Error;

use nodecaret_metrics::MetricsError;

use crate::registry::NodeId;

/// Errors surfaced by the engine and registry.
///
/// Every failure here is synchronous and immediate; the engine performs no
/// I/O, so there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A metrics request carried neither a cursor index nor a selection, or
    /// both at once.
    #[error("request must carry exactly one of a cursor index or a selection")]
    InvalidRequest,

    /// The node has no live editor handle: either it was never created or it
    /// was removed while the request was in flight. Callers are expected to
    /// drop the stale request.
    #[error("no live editor for node {0}")]
    NotFound(NodeId),

    /// The host reported a structural creation for a node that already has a
    /// live handle. The host guarantees identifier uniqueness, so this is a
    /// host bug, not something to recover from.
    #[error("node {0} already has a live editor")]
    NodeAlreadyLive(NodeId),

    /// The single global keyboard listener was acquired while active, or
    /// released while inactive. Also a host bug.
    #[error("keyboard listener conflict: {0}")]
    ResourceConflict(&'static str),

    /// Measurement failed; propagated as-is, never substituted with a
    /// default position.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
