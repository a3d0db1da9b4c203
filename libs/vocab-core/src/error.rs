//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur when driving a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("not enough cards to build a quiz: have {have}, need at least {need}")]
    NotEnoughCards { have: usize, need: usize },
}
