//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// A card could not be built from the given fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("cloze target {target:?} does not occur in the full text")]
    TargetNotFound { target: String },

    #[error("cloze substitution left the full text unchanged")]
    NothingReplaced,
}

/// Recoverable rejection of a validated answer. The same question is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fatal session errors. None of these can be recovered by re-prompting.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] CardError),

    #[error("card index {index} out of range (store holds {len} cards)")]
    OutOfRange { index: usize, len: usize },

    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("prompt driver failed: {0}")]
    Driver(String),
}
