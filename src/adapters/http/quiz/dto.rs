//! HTTP DTOs (Data Transfer Objects) for quiz endpoints.
//!
//! These types define the JSON request/response structure for the quiz API.
//! Question views deliberately omit archetype mappings and weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::quiz::{AnswerSet, Question, QuestionOption, QuizResult, SelectionMode};
use crate::ports::StyleProfileRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to score an answer set.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreQuizRequest {
    /// Question id to option id (single) or option ids (multi-select).
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Request to submit a lead with their result.
///
/// Every field is optional at the wire level so that missing fields surface
/// as validation errors rather than decode errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub result: Option<QuizResult>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

/// Query string for profile lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleProfileParams {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The question bank as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub total: usize,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl From<&QuestionOption> for OptionView {
    fn from(option: &QuestionOption) -> Self {
        Self {
            id: option.id.clone(),
            text: option.text.clone(),
            image_url: option.image_url.clone(),
            image_alt: option.image_alt.clone(),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            title: question.title.clone(),
            subtitle: question.subtitle.clone(),
            mode: question.mode,
            max_selections: question.max_selections,
            options: question.options.iter().map(OptionView::from).collect(),
        }
    }
}

impl QuestionsResponse {
    pub fn from_questions(questions: &[Question]) -> Self {
        Self {
            total: questions.len(),
            questions: questions.iter().map(QuestionView::from).collect(),
        }
    }
}

/// Acknowledgement of a submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuizResponse {
    pub success: bool,
    pub message: String,
}

/// A style profile record.
#[derive(Debug, Clone, Serialize)]
pub struct StyleProfileResponse {
    pub id: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl From<StyleProfileRecord> for StyleProfileResponse {
    fn from(record: StyleProfileRecord) -> Self {
        Self {
            id: record.id,
            fields: record.fields,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
