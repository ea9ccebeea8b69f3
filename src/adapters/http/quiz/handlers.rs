//! HTTP handlers for quiz endpoints.
//!
//! These handlers connect axum routes to application layer handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::application::handlers::quiz::{
    GetStyleProfileHandler, GetStyleProfileQuery, ScoreAnswersHandler, ScoreAnswersQuery,
    SubmitQuizCommand, SubmitQuizHandler,
};
use crate::domain::quiz::{ProfileLookup, QuestionBank, QuizError};
use crate::ports::{CrmGateway, StyleProfileStore};

use super::dto::{
    ErrorResponse, QuestionsResponse, ScoreQuizRequest, StyleProfileParams, StyleProfileResponse,
    SubmitQuizRequest, SubmitQuizResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for quiz endpoints.
///
/// Integrations are optional: an unconfigured CRM skips delivery and an
/// unconfigured content store fails profile lookups.
#[derive(Clone)]
pub struct QuizAppState {
    pub bank: Arc<QuestionBank>,
    pub crm: Option<Arc<dyn CrmGateway>>,
    pub profiles: Option<Arc<dyn StyleProfileStore>>,
}

impl QuizAppState {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            crm: None,
            profiles: None,
        }
    }

    pub fn with_crm(mut self, crm: Arc<dyn CrmGateway>) -> Self {
        self.crm = Some(crm);
        self
    }

    pub fn with_profiles(mut self, profiles: Arc<dyn StyleProfileStore>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn score_answers_handler(&self) -> ScoreAnswersHandler {
        ScoreAnswersHandler::new(self.bank.clone())
    }

    pub fn submit_quiz_handler(&self) -> SubmitQuizHandler {
        SubmitQuizHandler::new(self.crm.clone())
    }

    pub fn get_style_profile_handler(&self) -> GetStyleProfileHandler {
        GetStyleProfileHandler::new(self.profiles.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/quiz/questions - The question bank without scoring data
pub async fn get_questions(State(state): State<QuizAppState>) -> impl IntoResponse {
    Json(QuestionsResponse::from_questions(state.bank.questions()))
}

/// POST /api/quiz/score - Score an answer set
pub async fn score_quiz(
    State(state): State<QuizAppState>,
    payload: Result<Json<ScoreQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuizApiError> {
    let Json(request) = payload?;

    let handler = state.score_answers_handler();
    let result = handler.handle(ScoreAnswersQuery {
        answers: request.answers,
    })?;

    Ok(Json(result))
}

/// POST /api/submit-quiz - Submit a lead and forward it to the CRM
pub async fn submit_quiz(
    State(state): State<QuizAppState>,
    payload: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuizApiError> {
    let Json(request) = payload?;

    let handler = state.submit_quiz_handler();
    handler
        .handle(SubmitQuizCommand {
            name: request.name,
            email: request.email,
            result: request.result,
            timestamp: request.timestamp,
        })
        .await?;

    Ok(Json(SubmitQuizResponse {
        success: true,
        message: "Quiz results submitted successfully".to_string(),
    }))
}

/// GET /api/style-profile - Long-form profile for an archetype combination
pub async fn get_style_profile(
    State(state): State<QuizAppState>,
    Query(params): Query<StyleProfileParams>,
) -> Result<impl IntoResponse, QuizApiError> {
    let lookup = ProfileLookup::parse(
        params.primary.as_deref(),
        params.secondary.as_deref(),
        params.tertiary.as_deref(),
    )?;

    let handler = state.get_style_profile_handler();
    let result = handler.handle(GetStyleProfileQuery { lookup }).await?;

    Ok(Json(StyleProfileResponse::from(result.record)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts quiz errors to HTTP responses.
#[derive(Debug)]
pub enum QuizApiError {
    Domain(QuizError),
    MalformedBody(JsonRejection),
}

impl From<QuizError> for QuizApiError {
    fn from(err: QuizError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for QuizApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for QuizApiError {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            QuizApiError::MalformedBody(rejection) => {
                let body = ErrorResponse::new("VALIDATION_FAILED", rejection.body_text());
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            QuizApiError::Domain(err) => err,
        };

        let (status, error_code) = match &err {
            QuizError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            QuizError::InvalidAnswer { .. } => (StatusCode::BAD_REQUEST, "INVALID_ANSWER"),
            QuizError::SelectionLimitReached { .. } => {
                (StatusCode::BAD_REQUEST, "SELECTION_LIMIT_REACHED")
            }
            QuizError::EmptyRanking => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_RANKING"),
            QuizError::CannotAdvance { .. }
            | QuizError::AlreadyComplete
            | QuizError::QuestionOutOfRange { .. } => (StatusCode::CONFLICT, "INVALID_QUIZ_STATE"),
            QuizError::ProfileNotFound { .. } => (StatusCode::NOT_FOUND, "PROFILE_NOT_FOUND"),
            QuizError::ContentStoreNotConfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONTENT_STORE_NOT_CONFIGURED")
            }
            QuizError::ContentStore(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONTENT_STORE_ERROR"),
        };

        let body = match &err {
            QuizError::Validation(v) => ErrorResponse::with_details(
                error_code,
                err.message(),
                serde_json::json!({ "field": v.field() }),
            ),
            _ => ErrorResponse::new(error_code, err.message()),
        };
        (status, Json(body)).into_response()
    }
}
