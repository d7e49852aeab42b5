//! Quiz error types.

use thiserror::Error;

/// Errors raised by the quiz model and session bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A quiz must contain at least one question.
    #[error("a quiz needs at least one question")]
    NoQuestions,

    /// Menu selector outside `1..=4`.
    #[error("invalid level selector: {0}")]
    InvalidLevel(i64),

    /// Menu selector outside `1..=5`.
    #[error("invalid operation selector: {0}")]
    InvalidOperation(i64),

    /// A level or operation name that could not be parsed.
    #[error("unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },

    /// Answer recorded for a question that does not exist.
    #[error("question index {index} out of range (quiz has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Answer recorded twice for the same question.
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),
}
