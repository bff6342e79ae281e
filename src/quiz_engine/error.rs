//! Quiz error types.
//!
//! Loading and generation failures are fatal to starting a session. Submission
//! failures are recoverable: the caller re-prompts and the session is left
//! exactly as it was.

use std::path::PathBuf;

use thiserror::Error;

use crate::quiz_engine::models::QuestionKind;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The vocabulary holds no usable entries.
    #[error("insufficient vocabulary data: {0}")]
    InsufficientData(String),

    /// A free-text answer was blank after trimming.
    #[error("empty answer, please enter a response")]
    EmptySubmission,

    /// A vocabulary record is missing a field or has a blank value.
    #[error("malformed vocabulary record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The response shape does not fit the question kind.
    #[error("response does not match a {expected} question")]
    ResponseMismatch { expected: QuestionKind },

    /// Terminal input could not be mapped to the listed options.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Every question has already been answered.
    #[error("the quiz is already finished")]
    SessionFinished,

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl QuizError {
    /// Returns `true` if the error prevents a session from starting at all.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuizError::InsufficientData(_)
                | QuizError::Io { .. }
                | QuizError::Json(_)
                | QuizError::Config(_)
        )
    }

    /// Returns `true` if the caller should simply ask for the answer again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::EmptySubmission
                | QuizError::ResponseMismatch { .. }
                | QuizError::InvalidSelection(_)
        )
    }
}
