//! Error types for the move directive.
//!
//! Event handlers never fail: misuse at the event level is a silent no-op.
//! Errors surface only from lifecycle calls (`mount`) and from loading
//! options or replay traces.

use crate::host::NodeId;
use thiserror::Error;

/// Errors that can occur while wiring or configuring a draggable handle
#[derive(Error, Debug)]
pub enum MoveError {
    /// The handle was never attached (or was already detached)
    #[error("handle {0:?} is not attached")]
    UnknownHandle(NodeId),

    /// The target accessor returned no node when the handle was mounted
    #[error("target for handle {0:?} could not be resolved")]
    TargetMissing(NodeId),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay trace is structurally valid JSON but cannot be replayed
    #[error("invalid trace: {0}")]
    InvalidTrace(String),
}

/// Result type alias for directive operations
pub type MoveResult<T> = Result<T, MoveError>;
