//! Scoring engine - tallies an answer set into a classified quiz result.
//!
//! # Algorithm
//!
//! 1. Every archetype starts at zero.
//! 2. Each selected option adds its effective weight (option weight, else
//!    question weight, else 1) to the archetype it maps to. Selections that
//!    do not resolve in the question bank are skipped.
//! 3. Non-zero scores are ranked descending; equal scores keep catalog order.
//! 4. Primary is the top entry. Secondary qualifies when its score is
//!    strictly above 30% of the primary score. Tertiary qualifies when a
//!    secondary exists and its score is strictly above 20% of the primary.
//!
//! Threshold comparisons use integer arithmetic (`10·s > 3·p`) so that a
//! score of exactly 30% never qualifies.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{AnswerSet, AnswerValue, Archetype, QuestionBank, QuizError};

/// Secondary qualifies when `score * 10 > primary * SECONDARY_TENTHS`.
const SECONDARY_TENTHS: u32 = 3;

/// Tertiary qualifies when `score * 10 > primary * TERTIARY_TENTHS`.
const TERTIARY_TENTHS: u32 = 2;

/// Per-archetype point accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector([u32; 6]);

impl ScoreVector {
    pub fn get(&self, archetype: Archetype) -> u32 {
        self.0[archetype.index()]
    }

    pub fn add(&mut self, archetype: Archetype, points: u32) {
        self.0[archetype.index()] += points;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(archetype, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, u32)> + '_ {
        Archetype::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Non-zero scores, highest first; ties keep catalog order.
    pub fn ranked(&self) -> Vec<(Archetype, u32)> {
        let mut ranked: Vec<(Archetype, u32)> = self.iter().filter(|(_, s)| *s > 0).collect();
        // stable sort: equal scores stay in catalog order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for (archetype, score) in self.iter() {
            map.serialize_entry(archetype.as_str(), &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<Archetype, u32>::deserialize(deserializer)?;
        let mut scores = ScoreVector::default();
        for (archetype, score) in raw {
            scores.add(archetype, score);
        }
        Ok(scores)
    }
}

/// Classified outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub primary: Archetype,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Archetype>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<Archetype>,

    #[serde(default)]
    pub scores: ScoreVector,

    pub description: String,
}

impl QuizResult {
    /// Classifies a score vector.
    ///
    /// Fails with [`QuizError::EmptyRanking`] when every score is zero.
    pub fn classify(scores: ScoreVector) -> Result<Self, QuizError> {
        let ranked = scores.ranked();
        let (primary, primary_score) = *ranked.first().ok_or(QuizError::EmptyRanking)?;

        let secondary = ranked
            .get(1)
            .filter(|(_, s)| s * 10 > primary_score * SECONDARY_TENTHS)
            .map(|(a, _)| *a);

        let tertiary = secondary.and_then(|_| {
            ranked
                .get(2)
                .filter(|(_, s)| s * 10 > primary_score * TERTIARY_TENTHS)
                .map(|(a, _)| *a)
        });

        Ok(Self {
            primary,
            secondary,
            tertiary,
            scores,
            description: describe(primary, secondary, tertiary),
        })
    }

    /// Long-form description of the primary archetype.
    pub fn primary_description(&self) -> &'static str {
        self.primary.description()
    }

    /// Short description of the secondary influence, if any.
    pub fn secondary_description(&self) -> Option<&'static str> {
        self.secondary.map(|a| a.influence_description())
    }
}

/// Builds the one-line summary, e.g. `You're mostly Bold with Classic influences.`
pub fn describe(
    primary: Archetype,
    secondary: Option<Archetype>,
    tertiary: Option<Archetype>,
) -> String {
    let mut description = format!("You're mostly {}", primary.display_name());
    if let Some(secondary) = secondary {
        description.push_str(&format!(" with {} influences", secondary.display_name()));
        if let Some(tertiary) = tertiary {
            description.push_str(&format!(" and an element of {}", tertiary.display_name()));
        }
    }
    description.push('.');
    description
}

/// Pure scoring over a question bank.
pub struct Scorer<'a> {
    bank: &'a QuestionBank,
}

impl<'a> Scorer<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Accumulates the score vector for an answer set.
    pub fn tally(&self, answers: &AnswerSet) -> ScoreVector {
        let mut scores = ScoreVector::default();
        for (question_id, value) in answers.iter() {
            let Some(question) = self.bank.question(question_id) else {
                continue;
            };
            let selected: Vec<&str> = match value {
                AnswerValue::Single(id) => vec![id.as_str()],
                AnswerValue::Multiple(ids) => ids.iter().map(String::as_str).collect(),
            };
            for option_id in selected {
                if let Some(option) = question.option(option_id) {
                    scores.add(option.archetype, question.option_weight(option));
                }
            }
        }
        scores
    }

    /// Checks every answer against its question and drops repeated ids.
    ///
    /// Answers to questions missing from the bank are passed through; the
    /// tally skips them.
    pub fn normalize(&self, answers: &AnswerSet) -> Result<AnswerSet, QuizError> {
        answers
            .iter()
            .map(|(question_id, value)| {
                let value = match self.bank.question(question_id) {
                    Some(question) => question.normalize_answer(value.clone())?,
                    None => value.clone(),
                };
                Ok::<_, QuizError>((question_id, value))
            })
            .collect()
    }

    /// Tallies and classifies an answer set.
    pub fn score(&self, answers: &AnswerSet) -> Result<QuizResult, QuizError> {
        QuizResult::classify(self.tally(answers))
    }
}
