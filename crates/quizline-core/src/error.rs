//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A question index fell outside the question bank.
    #[error("question index {index} is out of range for a bank of {len} questions")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of questions in the bank.
        len: usize,
    },

    /// The conversation context carried parameters of the wrong shape.
    #[error("malformed context: {0}")]
    MalformedContext(String),

    /// The platform sent an intent this webhook has no handler for.
    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
