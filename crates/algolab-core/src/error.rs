//! Error type for the algorithm library.

/// Errors raised while resolving or validating an algorithm request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// The request body failed validation.
    #[error("{0}")]
    InvalidInput(String),

    /// No algorithm with this id exists.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// No listing language with this name exists.
    #[error("unknown implementation language: {0}")]
    UnknownLanguage(String),
}

impl AlgoError {
    pub(crate) fn invalid(message: &str) -> Self {
        Self::InvalidInput(message.to_string())
    }
}
