//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that the quiz
//! domain is built from.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SubmissionId;
pub use timestamp::Timestamp;
