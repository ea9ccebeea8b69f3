//! Axum router configuration for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, get_style_profile, score_quiz, submit_quiz, QuizAppState};

/// Create the quiz API router.
///
/// # Routes
/// - `GET /quiz/questions` - Question bank without scoring data
/// - `POST /quiz/score` - Score an answer set
/// - `POST /submit-quiz` - Submit a lead with its result
/// - `GET /style-profile` - Profile lookup (query: primary, secondary, tertiary)
///
/// Suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// let state = QuizAppState::new(Arc::new(QuestionBank::embedded()?));
/// let app = Router::new()
///     .nest("/api", quiz_router())
///     .with_state(state);
/// ```
pub fn quiz_router() -> Router<QuizAppState> {
    Router::new()
        .route("/quiz/questions", get(get_questions))
        .route("/quiz/score", post(score_quiz))
        .route("/submit-quiz", post(submit_quiz))
        .route("/style-profile", get(get_style_profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::domain::quiz::QuestionBank;

    fn app() -> Router {
        let state = QuizAppState::new(Arc::new(QuestionBank::embedded().unwrap()));
        Router::new().nest("/api", quiz_router()).with_state(state)
    }

    #[tokio::test]
    async fn questions_route_is_mounted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/quiz/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn score_rejects_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/quiz/score")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
