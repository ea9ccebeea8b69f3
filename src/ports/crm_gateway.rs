//! CRM gateway port for forwarding quiz leads.
//!
//! Defines the contract for marketing-automation integrations (e.g.
//! ActiveCampaign). Delivery is best-effort: callers log failures and never
//! let them affect an already computed quiz result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::quiz::Submission;

/// Port for marketing-automation / CRM integrations.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// Create (or sync) a contact carrying the quiz outcome.
    ///
    /// Returns the provider's contact id when the provider reports one.
    async fn upsert_contact(&self, contact: &LeadContact) -> Result<Option<String>, DeliveryError>;

    /// Create a contact tag, or look up an existing one.
    ///
    /// Returns the tag id when the provider reports one.
    async fn ensure_tag(&self, tag: &str) -> Result<Option<String>, DeliveryError>;

    /// Attach a tag to a contact.
    async fn tag_contact(&self, contact_id: &str, tag_id: &str) -> Result<(), DeliveryError>;
}

/// Contact record forwarded to the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub email: String,
    pub first_name: String,
    pub primary_archetype: String,
    /// Empty when the result has no secondary archetype.
    pub secondary_archetype: String,
    pub quiz_result: String,
    /// `YYYY-MM-DD` of the delivery.
    pub quiz_date: String,
}

impl LeadContact {
    /// Builds the CRM contact for a validated submission.
    pub fn from_submission(submission: &Submission, quiz_date: impl Into<String>) -> Self {
        Self {
            email: submission.email.clone(),
            first_name: submission.name.clone(),
            primary_archetype: submission.result.primary.as_str().to_string(),
            secondary_archetype: submission
                .result
                .secondary
                .map(|a| a.as_str().to_string())
                .unwrap_or_default(),
            quiz_result: submission.result.description.clone(),
            quiz_date: quiz_date.into(),
        }
    }
}

/// CRM delivery error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
    /// Error code for categorization.
    pub code: DeliveryErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status returned by the provider, if any.
    pub status: Option<u16>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl DeliveryError {
    pub fn new(code: DeliveryErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            retryable: code.is_retryable(),
        }
    }

    /// Transport failure (DNS, connect, timeout).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(DeliveryErrorCode::NetworkError, message)
    }

    /// Non-success HTTP response from the provider.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        let code = match status {
            401 | 403 => DeliveryErrorCode::AuthenticationError,
            429 => DeliveryErrorCode::RateLimitExceeded,
            _ => DeliveryErrorCode::ProviderError,
        };
        let mut err = Self::new(code, message);
        err.status = Some(status);
        err.retryable = code.is_retryable() || status >= 500;
        err
    }

    /// Response body could not be decoded.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(DeliveryErrorCode::InvalidResponse, message)
    }
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DeliveryError {}

/// CRM delivery error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API token rejected.
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider returned an error response.
    ProviderError,

    /// Provider response could not be decoded.
    InvalidResponse,
}

impl DeliveryErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DeliveryErrorCode::NetworkError | DeliveryErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for DeliveryErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeliveryErrorCode::NetworkError => "network_error",
            DeliveryErrorCode::AuthenticationError => "authentication_error",
            DeliveryErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            DeliveryErrorCode::ProviderError => "provider_error",
            DeliveryErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
