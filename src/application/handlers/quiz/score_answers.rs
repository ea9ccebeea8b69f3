//! ScoreAnswersHandler - Query handler turning an answer set into a result.

use std::sync::Arc;

use crate::domain::quiz::{AnswerSet, QuestionBank, QuizError, QuizResult, Scorer};

/// Query carrying the answers to score.
#[derive(Debug, Clone)]
pub struct ScoreAnswersQuery {
    pub answers: AnswerSet,
}

/// Handler for scoring an answer set against the shared question bank.
pub struct ScoreAnswersHandler {
    bank: Arc<QuestionBank>,
}

impl ScoreAnswersHandler {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn handle(&self, query: ScoreAnswersQuery) -> Result<QuizResult, QuizError> {
        let scorer = Scorer::new(&self.bank);
        let answers = scorer.normalize(&query.answers)?;
        let result = scorer.score(&answers)?;

        tracing::debug!(
            answered = answers.len(),
            primary = %result.primary,
            secondary = ?result.secondary,
            tertiary = ?result.tertiary,
            "Scored answer set"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{AnswerValue, Archetype};

    fn handler() -> ScoreAnswersHandler {
        ScoreAnswersHandler::new(Arc::new(QuestionBank::embedded().unwrap()))
    }

    #[test]
    fn scores_complete_answer_set() {
        let answers: AnswerSet = [
            ("jewelry", AnswerValue::from("a")),
            ("colors", AnswerValue::from("a")),
            ("fabrics", AnswerValue::from("a")),
        ]
        .into_iter()
        .collect();

        // Three-way tie at 3 points resolves in catalog order.
        let result = handler().handle(ScoreAnswersQuery { answers }).unwrap();
        assert_eq!(result.scores.total(), 9);
        assert_eq!(result.primary, Archetype::Classic);
        assert_eq!(result.secondary, Some(Archetype::Rebellious));
        assert_eq!(result.tertiary, Some(Archetype::Romantic));
    }

    #[test]
    fn empty_answers_fail_with_empty_ranking() {
        let err = handler()
            .handle(ScoreAnswersQuery {
                answers: AnswerSet::new(),
            })
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyRanking);
    }

    #[test]
    fn over_cap_set_is_rejected() {
        let ids: Vec<String> = ["a1", "a2", "a3", "a4", "a5", "a6", "b1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let answers = AnswerSet::new().with("personality", AnswerValue::Multiple(ids));
        let err = handler().handle(ScoreAnswersQuery { answers }).unwrap_err();
        assert_eq!(err, QuizError::selection_limit("personality", 6));
    }

    #[test]
    fn unknown_ids_score_nothing() {
        let answers = AnswerSet::new()
            .with("nope", "a")
            .with("jewelry", "zzz");
        let err = handler().handle(ScoreAnswersQuery { answers }).unwrap_err();
        assert_eq!(err, QuizError::EmptyRanking);
    }
}
