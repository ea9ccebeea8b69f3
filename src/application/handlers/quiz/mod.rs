//! Quiz handlers.
//!
//! ## Commands
//! - Submitting a lead with its quiz result
//!
//! ## Queries
//! - Scoring an answer set
//! - Looking up the long-form style profile for a result

mod get_style_profile;
mod score_answers;
mod submit_quiz;

// Commands
pub use submit_quiz::{DeliveryOutcome, SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};

// Queries
pub use get_style_profile::{GetStyleProfileHandler, GetStyleProfileQuery, GetStyleProfileResult};
pub use score_answers::{ScoreAnswersHandler, ScoreAnswersQuery};
