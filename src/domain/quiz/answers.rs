//! Answer set - the respondent's selections keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recorded answer to one question.
///
/// On the wire a single selection is a JSON string and a multi-selection is a
/// JSON array of option ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// Builds a multi-selection, dropping repeated ids while keeping order.
    pub fn multiple<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        AnswerValue::Multiple(selected)
    }

    /// Selected option ids, regardless of shape.
    pub fn option_ids(&self) -> Vec<&str> {
        match self {
            AnswerValue::Single(id) => vec![id.as_str()],
            AnswerValue::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    /// Number of options selected.
    pub fn selection_count(&self) -> usize {
        match self {
            AnswerValue::Single(id) if id.is_empty() => 0,
            AnswerValue::Single(_) => 1,
            AnswerValue::Multiple(ids) => ids.len(),
        }
    }

    /// True when the answer selects nothing (blank id or empty set).
    pub fn is_empty(&self) -> bool {
        self.selection_count() == 0
    }

    /// True if `option_id` is part of this answer.
    pub fn contains(&self, option_id: &str) -> bool {
        match self {
            AnswerValue::Single(id) => id == option_id,
            AnswerValue::Multiple(ids) => ids.iter().any(|id| id == option_id),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(id: &str) -> Self {
        AnswerValue::Single(id.to_string())
    }
}

/// Mapping of question id to recorded answer.
///
/// Iteration order is by question id, which keeps scoring deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the answer for a question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(question_id.into(), value);
    }

    /// Builder-style variant of [`AnswerSet::insert`].
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question_id, value.into());
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
