//! GetStyleProfileHandler - Query handler resolving a profile with slug
//! fallback.

use std::sync::Arc;

use crate::domain::quiz::{ProfileLookup, QuizError};
use crate::ports::{ContentStoreError, StyleProfileRecord, StyleProfileStore};

/// Query for a profile by archetype combination.
#[derive(Debug, Clone, Copy)]
pub struct GetStyleProfileQuery {
    pub lookup: ProfileLookup,
}

/// The profile found and the slug it was stored under.
#[derive(Debug, Clone)]
pub struct GetStyleProfileResult {
    pub matched_slug: String,
    pub record: StyleProfileRecord,
}

/// Handler for style profile lookups.
pub struct GetStyleProfileHandler {
    store: Option<Arc<dyn StyleProfileStore>>,
}

impl GetStyleProfileHandler {
    pub fn new(store: Option<Arc<dyn StyleProfileStore>>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetStyleProfileQuery,
    ) -> Result<GetStyleProfileResult, QuizError> {
        let store = self.store.as_ref().ok_or_else(|| {
            tracing::error!("Content store not configured");
            QuizError::ContentStoreNotConfigured
        })?;

        let slug = query.lookup.slug();
        for candidate in query.lookup.candidates() {
            let found = store.find_by_slug(&candidate).await.map_err(|e| {
                tracing::error!(
                    slug = %candidate,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Style profile lookup failed"
                );
                content_store_error(e)
            })?;

            if let Some(record) = found {
                if candidate != slug {
                    tracing::debug!(requested = %slug, matched = %candidate, "Used fallback profile");
                }
                return Ok(GetStyleProfileResult {
                    matched_slug: candidate,
                    record,
                });
            }
        }

        tracing::info!(slug = %slug, "No style profile found");
        Err(QuizError::profile_not_found(slug))
    }
}

fn content_store_error(err: ContentStoreError) -> QuizError {
    QuizError::ContentStore(err.to_string())
}
