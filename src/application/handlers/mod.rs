//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    DeliveryOutcome, GetStyleProfileHandler, GetStyleProfileQuery, GetStyleProfileResult,
    ScoreAnswersHandler, ScoreAnswersQuery, SubmitQuizCommand, SubmitQuizHandler,
    SubmitQuizResult,
};
