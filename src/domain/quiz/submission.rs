//! Submission - a lead's contact details together with their quiz result.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubmissionId, Timestamp, ValidationError};

use super::{QuizError, QuizResult};

/// Validated submission, ready to be forwarded.
///
/// Serializes as `{name, email, result, timestamp}`; the id is local to this
/// process and only used for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(skip)]
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub result: QuizResult,
    pub timestamp: Timestamp,
}

impl Submission {
    /// Validates raw submission fields.
    ///
    /// `name`, `email` and `result` are required; blank strings count as
    /// missing. A missing timestamp is stamped with the current time.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        result: Option<QuizResult>,
        timestamp: Option<Timestamp>,
    ) -> Result<Self, QuizError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let result = result.ok_or_else(|| QuizError::missing("result"))?;

        if !looks_like_email(&email) {
            return Err(ValidationError::invalid_format("email", "not an email address").into());
        }

        Ok(Self {
            id: SubmissionId::new(),
            name,
            email,
            result,
            timestamp: timestamp.unwrap_or_else(Timestamp::now),
        })
    }

    /// CRM tags for this lead: the primary style and, if present, the
    /// secondary one.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![format!("Style: {}", self.result.primary.display_name())];
        if let Some(secondary) = self.result.secondary {
            tags.push(format!("Secondary: {}", secondary.display_name()));
        }
        tags
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, QuizError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(QuizError::missing(field)),
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{Archetype, ScoreVector};

    fn result(secondary: Option<Archetype>) -> QuizResult {
        let mut scores = ScoreVector::default();
        scores.add(Archetype::Bold, 10);
        if let Some(s) = secondary {
            scores.add(s, 5);
        }
        QuizResult::classify(scores).unwrap()
    }

    #[test]
    fn accepts_complete_submission() {
        let sub = Submission::new(
            Some("Ada".into()),
            Some("ada@example.com".into()),
            Some(result(None)),
            None,
        )
        .unwrap();
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.result.primary, Archetype::Bold);
    }

    #[test]
    fn missing_email_is_a_validation_error() {
        let err = Submission::new(Some("Ada".into()), None, Some(result(None)), None).unwrap_err();
        assert_eq!(err, QuizError::missing("email"));
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let err = Submission::new(
            Some("   ".into()),
            Some("ada@example.com".into()),
            Some(result(None)),
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuizError::missing("name"));
    }

    #[test]
    fn missing_result_is_a_validation_error() {
        let err = Submission::new(Some("Ada".into()), Some("ada@example.com".into()), None, None)
            .unwrap_err();
        assert_eq!(err, QuizError::missing("result"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "@example.com", "ada@", "a@b@c"] {
            let err = Submission::new(
                Some("Ada".into()),
                Some(email.into()),
                Some(result(None)),
                None,
            )
            .unwrap_err();
            assert!(matches!(
                err,
                QuizError::Validation(ValidationError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn keeps_client_timestamp() {
        let ts: Timestamp = serde_json::from_str("\"2024-03-01T08:00:00Z\"").unwrap();
        let sub = Submission::new(
            Some("Ada".into()),
            Some("ada@example.com".into()),
            Some(result(None)),
            Some(ts),
        )
        .unwrap();
        assert_eq!(sub.timestamp, ts);
    }

    #[test]
    fn tags_include_secondary_when_present() {
        let sub = Submission::new(
            Some("Ada".into()),
            Some("ada@example.com".into()),
            Some(result(Some(Archetype::Classic))),
            None,
        )
        .unwrap();
        assert_eq!(sub.tags(), vec!["Style: Bold", "Secondary: Classic"]);
    }

    #[test]
    fn serializes_payload_without_local_id() {
        let sub = Submission::new(
            Some("Ada".into()),
            Some("ada@example.com".into()),
            Some(result(None)),
            None,
        )
        .unwrap();
        let json = serde_json::to_value(&sub).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(json.get("id").is_none());
        assert_eq!(json["result"]["primary"], "bold");
    }
}
