//! Questions and their answer options.

use serde::{Deserialize, Serialize};

use super::{AnswerValue, Archetype, QuizError};

/// Weight applied when neither the option nor its question declares one.
pub const DEFAULT_WEIGHT: u32 = 1;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Exactly one option.
    Single,
    /// A set of options, optionally capped by `max_selections`.
    Multiple,
    /// Exactly one option, presented as an image.
    #[serde(alias = "image-choice")]
    Image,
}

impl SelectionMode {
    /// Returns true if answers to this mode are option sets.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, SelectionMode::Multiple)
    }
}

/// A selectable answer to a question, contributing to one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Unique within the enclosing question.
    pub id: String,

    #[serde(default)]
    pub text: String,

    pub archetype: Archetype,

    /// Overrides the question weight when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

/// A single quiz step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(rename = "type")]
    pub mode: SelectionMode,

    /// Only meaningful for [`SelectionMode::Multiple`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,

    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Finds an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Returns true if the question accepts a set of options.
    pub fn is_multi_select(&self) -> bool {
        self.mode.is_multi_select()
    }

    /// Maximum number of options a multi-select answer may hold.
    ///
    /// `None` means uncapped; single-select questions always report `None`.
    pub fn selection_cap(&self) -> Option<usize> {
        if self.is_multi_select() {
            self.max_selections.map(|m| m as usize)
        } else {
            None
        }
    }

    /// Question-level scoring weight.
    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Points a chosen option adds to its archetype.
    pub fn option_weight(&self, option: &QuestionOption) -> u32 {
        option.weight.unwrap_or_else(|| self.weight())
    }

    /// Checks that an answer fits this question and returns it with repeated
    /// ids removed.
    ///
    /// Multi-select questions take a set no larger than the cap; every other
    /// mode takes a single id. The cap is checked after de-duplication.
    pub fn normalize_answer(&self, value: AnswerValue) -> Result<AnswerValue, QuizError> {
        match (value, self.is_multi_select()) {
            (AnswerValue::Multiple(ids), true) => {
                let value = AnswerValue::multiple(ids);
                if let Some(max) = self.selection_cap() {
                    if value.selection_count() > max {
                        return Err(QuizError::selection_limit(&self.id, max));
                    }
                }
                Ok(value)
            }
            (AnswerValue::Single(_), true) => Err(QuizError::invalid_answer(
                &self.id,
                "expected a set of options",
            )),
            (AnswerValue::Multiple(_), false) => Err(QuizError::invalid_answer(
                &self.id,
                "expected a single option",
            )),
            (single @ AnswerValue::Single(_), false) => Ok(single),
        }
    }
}
