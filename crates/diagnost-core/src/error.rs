//! Session error types.
//!
//! Scoring itself never fails; these errors only cover a host driving a
//! [`crate::session::DiagnosticSession`] out of order or with indices that
//! do not exist in the quiz.

use thiserror::Error;

/// Errors raised by the diagnostic session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session is still on its intro screen.
    #[error("session has not been started")]
    NotStarted,

    /// `begin` was called on a session that is already running.
    #[error("session is already in progress")]
    AlreadyStarted,

    /// The session was submitted; start a new one to retake.
    #[error("session has already been submitted")]
    AlreadySubmitted,

    /// No question exists at this index.
    #[error("question {index} is out of range (quiz has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    /// The question has no option at this index.
    #[error("option {option} is out of range for question {question} ({len} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        len: usize,
    },
}
