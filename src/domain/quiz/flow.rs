//! Quiz flow controller.
//!
//! Walks a respondent through the question bank one question at a time:
//!
//! ```text
//! InProgress(i) --advance, i < last--> InProgress(i + 1)
//! InProgress(last) --advance--------> Complete        (scores once)
//! InProgress(i) --retreat-----------> InProgress(max(0, i - 1))
//! Complete --reset------------------> InProgress(0)
//! ```
//!
//! Answers survive backward navigation. Nothing leaves `Complete` except
//! `reset`.

use std::sync::Arc;

use serde::Serialize;

use super::{AnswerSet, AnswerValue, Question, QuestionBank, QuizError, QuizResult, Scorer};

/// Position of a quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizStatus {
    InProgress { step: usize },
    Complete,
}

impl QuizStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, QuizStatus::Complete)
    }
}

/// One respondent's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    bank: Arc<QuestionBank>,
    answers: AnswerSet,
    status: QuizStatus,
    result: Option<QuizResult>,
}

impl QuizFlow {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
            status: QuizStatus::InProgress { step: 0 },
            result: None,
        }
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The scored result, available once the flow is complete.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// `(1-based step, total steps)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.bank.len();
        match self.status {
            QuizStatus::InProgress { step } => (step + 1, total),
            QuizStatus::Complete => (total, total),
        }
    }

    /// Question under the step pointer.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        match self.status {
            QuizStatus::Complete => Err(QuizError::AlreadyComplete),
            QuizStatus::InProgress { step } => self
                .bank
                .question_at(step)
                .ok_or(QuizError::QuestionOutOfRange { index: step }),
        }
    }

    /// Answer currently recorded for the question under the step pointer.
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question().ok()?;
        self.answers.get(&question.id)
    }

    /// Overwrites the current question's answer.
    ///
    /// See [`Question::normalize_answer`]. A rejected answer keeps the
    /// previous one. An empty set is accepted but blocks advancing.
    pub fn record_answer(&mut self, value: AnswerValue) -> Result<(), QuizError> {
        let question = self.current_question()?;
        let value = question.normalize_answer(value)?;
        let question_id = question.id.clone();
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Selects an option the way the quiz UI does.
    ///
    /// Multi-select questions toggle membership; adding beyond the cap fails
    /// with [`QuizError::SelectionLimitReached`] and leaves the selection
    /// unchanged. Single-select questions replace the current choice.
    pub fn toggle_option(&mut self, option_id: &str) -> Result<(), QuizError> {
        let question = self.current_question()?;
        if question.option(option_id).is_none() {
            return Err(QuizError::invalid_answer(
                &question.id,
                format!("unknown option '{}'", option_id),
            ));
        }

        if !question.is_multi_select() {
            return self.record_answer(AnswerValue::Single(option_id.to_string()));
        }

        let mut selected = match self.answers.get(&question.id) {
            Some(AnswerValue::Multiple(ids)) => ids.clone(),
            _ => Vec::new(),
        };
        if let Some(pos) = selected.iter().position(|id| id == option_id) {
            selected.remove(pos);
        } else {
            selected.push(option_id.to_string());
        }
        self.record_answer(AnswerValue::Multiple(selected))
    }

    /// True when the current question holds a non-empty answer.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some_and(|a| !a.is_empty())
    }

    /// Moves to the next question, or completes the quiz on the last one.
    ///
    /// Completing scores the answer set exactly once. If scoring fails the
    /// error is returned and the flow stays on the last question.
    pub fn advance(&mut self) -> Result<QuizStatus, QuizError> {
        let question = self.current_question()?;
        if !self.can_advance() {
            return Err(QuizError::cannot_advance(&question.id));
        }

        let QuizStatus::InProgress { step } = self.status else {
            return Err(QuizError::AlreadyComplete);
        };

        if step >= self.bank.last_index() {
            let result = Scorer::new(&self.bank).score(&self.answers)?;
            self.result = Some(result);
            self.status = QuizStatus::Complete;
        } else {
            self.status = QuizStatus::InProgress { step: step + 1 };
        }
        Ok(self.status)
    }

    /// Steps back one question, keeping all answers. No-op at step zero and
    /// once complete.
    pub fn retreat(&mut self) -> QuizStatus {
        if let QuizStatus::InProgress { step } = self.status {
            self.status = QuizStatus::InProgress {
                step: step.saturating_sub(1),
            };
        }
        self.status
    }

    /// Clears answers and result and returns to the first question.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
        self.status = QuizStatus::InProgress { step: 0 };
    }
}
