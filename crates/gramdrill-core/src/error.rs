//! Engine error types.
//!
//! Both variants are caller-recoverable: an unknown kind is a caller bug and
//! an empty bank is a data misconfiguration. Missing or empty user answers
//! are never errors, they grade as incorrect.

use thiserror::Error;

/// Errors that can occur when selecting a bank or grading responses.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An exercise kind outside the closed set of three.
    #[error("invalid exercise kind: {0}")]
    InvalidExerciseKind(String),

    /// Grading was attempted against a bank with no questions.
    #[error("question bank \"{0}\" contains no questions")]
    NoQuestions(String),
}
