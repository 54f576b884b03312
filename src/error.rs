//! Error types for bipartite matching operations

use thiserror::Error;

/// Result type alias for matching operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for graph construction, parsing, and matching verification
#[derive(Error, Debug)]
pub enum Error {
    /// Input text that cannot be read as a bipartite instance
    #[error("Malformed input: {reason}")]
    MalformedInput {
        /// Description of the offending token or structure
        reason: String,
    },

    /// Matching state that fails a self-consistency check
    #[error("Invariant violation: {reason}")]
    InvariantViolation {
        /// Description of the inconsistency
        reason: String,
    },

    /// I/O error while reading or writing instance files
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-input error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create an invariant-violation error
    pub fn invariant(reason: impl Into<String>) -> Self {
        Error::InvariantViolation {
            reason: reason.into(),
        }
    }
}
