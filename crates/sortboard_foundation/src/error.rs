//! Error types for the Sortboard system.
//!
//! Uses `thiserror` for ergonomic error definition. The algorithm core is
//! total over its inputs; these errors cover the surrounding surface
//! (indices, algorithm names, run state, IO, serialization).

use thiserror::Error;

/// Convenience result type for Sortboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Sortboard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an unknown algorithm error.
    #[must_use]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAlgorithm(name.into()))
    }

    /// Creates a run-in-progress error.
    #[must_use]
    pub fn run_in_progress() -> Self {
        Self::new(ErrorKind::RunInProgress)
    }

    /// Creates a no-active-run error.
    #[must_use]
    pub fn no_active_run() -> Self {
        Self::new(ErrorKind::NoActiveRun)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Index outside the sequence bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the sequence.
        length: usize,
    },

    /// Algorithm selector did not name a known algorithm.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A board mutation was requested while a trace run is in flight.
    #[error("a sort run is in progress; finish or abort it first")]
    RunInProgress,

    /// A step was requested with no trace run in flight.
    #[error("no sort run is in progress")]
    NoActiveRun,

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An IO operation failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
