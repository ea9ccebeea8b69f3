//! Quiz domain - archetypes, question bank, scoring and flow.
//!
//! # Module Organization
//!
//! - `archetype` - The six style archetypes and their descriptions
//! - `question` / `question_bank` - Immutable question data, loaded once
//! - `answers` - Answer values and answer sets
//! - `scoring` - Pure scoring and classification
//! - `flow` - Step-by-step quiz state machine
//! - `submission` - Validated lead submissions
//! - `profile_lookup` - Profile slug construction and fallback order

mod answers;
mod archetype;
mod errors;
mod flow;
mod profile_lookup;
mod question;
mod question_bank;
mod scoring;
mod submission;

pub use answers::{AnswerSet, AnswerValue};
pub use archetype::Archetype;
pub use errors::QuizError;
pub use flow::{QuizFlow, QuizStatus};
pub use profile_lookup::ProfileLookup;
pub use question::{Question, QuestionOption, SelectionMode, DEFAULT_WEIGHT};
pub use question_bank::{QuestionBank, QuestionBankError, MAX_WEIGHT};
pub use scoring::{describe, QuizResult, ScoreVector, Scorer};
pub use submission::Submission;
