//! StyleProfileStore port for long-form profile content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A profile record as held by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfileRecord {
    /// Store-assigned record id
    pub id: String,
    /// Arbitrary content fields (title, body, imagery, ...)
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Content store failures. A missing record is not an error; see
/// [`StyleProfileStore::find_by_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentStoreError {
    #[error("Content store request failed: {0}")]
    Network(String),

    #[error("Content store returned HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Content store response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl ContentStoreError {
    /// Transport failures, rate limits and 5xx responses may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentStoreError::Network(_) => true,
            ContentStoreError::Rejected { status, .. } => *status == 429 || *status >= 500,
            ContentStoreError::InvalidResponse(_) => false,
        }
    }
}

/// Read access to style profiles keyed by archetype slug
#[async_trait]
pub trait StyleProfileStore: Send + Sync {
    /// Find the profile stored under an exact slug, `None` if there is none.
    async fn find_by_slug(&self, slug: &str)
        -> Result<Option<StyleProfileRecord>, ContentStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(ContentStoreError::Network("reset".into()).is_retryable());
        assert!(ContentStoreError::Rejected {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!ContentStoreError::Rejected {
            status: 404,
            message: String::new()
        }
        .is_retryable());
        assert!(!ContentStoreError::InvalidResponse("garbage".into()).is_retryable());
    }
}
