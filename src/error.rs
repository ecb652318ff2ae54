use thiserror::Error;

/// Errors produced while building an engine or reading a guess request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The vocabulary had no words, so no letter statistics exist
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A request was missing a field or carried an invalid value
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl GuessError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        GuessError::MalformedRequest(msg.into())
    }
}
