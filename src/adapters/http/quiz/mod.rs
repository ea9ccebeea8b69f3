//! HTTP adapter for quiz endpoints.
//!
//! Exposes the quiz via REST API:
//! - `GET /api/quiz/questions` - The question bank (no archetypes or weights)
//! - `POST /api/quiz/score` - Score an answer set
//! - `POST /api/submit-quiz` - Submit a lead and forward it to the CRM
//! - `GET /api/style-profile` - Long-form profile with slug fallback

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{QuizApiError, QuizAppState};
pub use routes::quiz_router;
