//! Question bank - the ordered, immutable set of quiz questions.
//!
//! The bank is the single source of truth for the option → archetype mapping
//! and for scoring weights. It is loaded once at start-up (from the embedded
//! default YAML or a configured file), validated, and shared by reference.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::{Archetype, Question};

/// Upper bound accepted for any scoring weight.
pub const MAX_WEIGHT: u32 = 100;

const EMBEDDED_BANK: &str = include_str!("../../../data/question_bank.yaml");

/// Errors raised while loading a question bank.
#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("Failed to read question bank file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid question bank: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct QuestionBankDocument {
    questions: Vec<Question>,
}

/// Ordered, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from already-constructed questions, validating them.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    /// The seven-question bank shipped with the crate.
    pub fn embedded() -> Result<Self, QuestionBankError> {
        Self::from_yaml(EMBEDDED_BANK)
    }

    /// Parses and validates a YAML document with a top-level `questions` list.
    pub fn from_yaml(yaml: &str) -> Result<Self, QuestionBankError> {
        let doc: QuestionBankDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::new(doc.questions)?)
    }

    /// Reads a YAML question bank from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Question at a zero-based step, `None` when out of range.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question by id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Archetype a given option of a given question contributes to.
    pub fn archetype_for(&self, question_id: &str, option_id: &str) -> Option<Archetype> {
        self.question(question_id)?
            .option(option_id)
            .map(|o| o.archetype)
    }

    /// Points a given option adds when chosen.
    pub fn effective_weight(&self, question_id: &str, option_id: &str) -> Option<u32> {
        let question = self.question(question_id)?;
        let option = question.option(option_id)?;
        Some(question.option_weight(option))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Zero-based index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

fn validate(questions: &[Question]) -> Result<(), ValidationError> {
    if questions.is_empty() {
        return Err(ValidationError::empty_field("questions"));
    }

    let mut question_ids = HashSet::new();
    for question in questions {
        if question.id.trim().is_empty() {
            return Err(ValidationError::empty_field("questions.id"));
        }
        if !question_ids.insert(question.id.as_str()) {
            return Err(ValidationError::duplicate("questions.id", &question.id));
        }
        if question.options.is_empty() {
            return Err(ValidationError::empty_field(format!(
                "questions.{}.options",
                question.id
            )));
        }

        match (question.is_multi_select(), question.max_selections) {
            (false, Some(_)) => {
                return Err(ValidationError::invalid_format(
                    format!("questions.{}.max_selections", question.id),
                    "only multi-select questions may declare a selection cap",
                ));
            }
            (true, Some(max)) if max == 0 || max as usize > question.options.len() => {
                return Err(ValidationError::out_of_range(
                    format!("questions.{}.max_selections", question.id),
                    1,
                    question.options.len() as u32,
                    max,
                ));
            }
            _ => {}
        }

        check_weight(&format!("questions.{}.weight", question.id), question.weight)?;

        let mut option_ids = HashSet::new();
        for option in &question.options {
            if option.id.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "questions.{}.options.id",
                    question.id
                )));
            }
            if !option_ids.insert(option.id.as_str()) {
                return Err(ValidationError::duplicate(
                    format!("questions.{}.options.id", question.id),
                    &option.id,
                ));
            }
            if option.text.trim().is_empty() && option.image_url.is_none() {
                return Err(ValidationError::empty_field(format!(
                    "questions.{}.options.{}.text",
                    question.id, option.id
                )));
            }
            check_weight(
                &format!("questions.{}.options.{}.weight", question.id, option.id),
                option.weight,
            )?;
        }
    }

    Ok(())
}

fn check_weight(field: &str, weight: Option<u32>) -> Result<(), ValidationError> {
    match weight {
        Some(w) if w == 0 || w > MAX_WEIGHT => {
            Err(ValidationError::out_of_range(field, 1, MAX_WEIGHT, w))
        }
        _ => Ok(()),
    }
}
