//! Error types for engine operations.
//!
//! The geometry kernel is total; the only fallible edge is mutating the
//! label store at gesture commit.

use crate::types::LabelId;
use thiserror::Error;

/// Errors that can occur while committing a gesture.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The store no longer contains the label the gesture was operating on.
    #[error("unknown label: {0}")]
    UnknownLabel(LabelId),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
