//! Quiz-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | InvalidAnswer | 400 |
//! | SelectionLimitReached | 400 |
//! | EmptyRanking | 422 |
//! | CannotAdvance | 409 |
//! | AlreadyComplete | 409 |
//! | QuestionOutOfRange | 409 |
//! | ProfileNotFound | 404 |
//! | ContentStoreNotConfigured | 500 |
//! | ContentStore | 500 |

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised by the quiz domain and its application handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A required field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The answer set produced no non-zero score.
    #[error("No archetype scored above zero; a primary archetype cannot be determined")]
    EmptyRanking,

    /// The flow's step pointer does not address a question.
    #[error("No question at step {index}")]
    QuestionOutOfRange { index: usize },

    /// The quiz is complete; only reset is accepted.
    #[error("Quiz is already complete")]
    AlreadyComplete,

    /// The current question has no usable answer yet.
    #[error("Question '{question_id}' must be answered before advancing")]
    CannotAdvance { question_id: String },

    /// A multi-select answer would exceed its cap.
    #[error("Question '{question_id}' allows at most {max} selections")]
    SelectionLimitReached { question_id: String, max: usize },

    /// The answer does not fit the question.
    #[error("Invalid answer for question '{question_id}': {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    /// No style profile matched any lookup key.
    #[error("Style profile not found for '{slug}'")]
    ProfileNotFound { slug: String },

    /// The content store credentials are missing.
    #[error("Content store configuration missing")]
    ContentStoreNotConfigured,

    /// The content store failed to answer.
    #[error("Content store error: {0}")]
    ContentStore(String),
}

impl QuizError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        QuizError::Validation(ValidationError::invalid_format(field, reason))
    }

    pub fn missing(field: impl Into<String>) -> Self {
        QuizError::Validation(ValidationError::empty_field(field))
    }

    pub fn cannot_advance(question_id: impl Into<String>) -> Self {
        QuizError::CannotAdvance {
            question_id: question_id.into(),
        }
    }

    pub fn selection_limit(question_id: impl Into<String>, max: usize) -> Self {
        QuizError::SelectionLimitReached {
            question_id: question_id.into(),
            max,
        }
    }

    pub fn invalid_answer(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        QuizError::InvalidAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }

    pub fn profile_not_found(slug: impl Into<String>) -> Self {
        QuizError::ProfileNotFound { slug: slug.into() }
    }

    /// Human-readable message for API responses.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            QuizError::ContentStoreNotConfigured | QuizError::ContentStore(_)
        )
    }
}
