//! In-memory style profile store.
//!
//! Used by tests and for running the service without a content store account.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::ports::{ContentStoreError, StyleProfileRecord, StyleProfileStore};

/// `StyleProfileStore` over a slug-keyed map.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    records: Arc<RwLock<HashMap<String, StyleProfileRecord>>>,
    failure: Arc<RwLock<Option<ContentStoreError>>>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under `slug`; `fields` must be a JSON object.
    pub fn insert(&self, slug: &str, id: &str, fields: serde_json::Value) {
        let fields = match fields {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        self.records.write().unwrap().insert(
            slug.to_string(),
            StyleProfileRecord {
                id: id.to_string(),
                fields,
            },
        );
    }

    /// Makes every subsequent lookup fail.
    pub fn fail_with(&self, error: ContentStoreError) {
        *self.failure.write().unwrap() = Some(error);
    }

    /// Slugs queried so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }
}

#[async_trait]
impl StyleProfileStore for InMemoryProfileStore {
    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<StyleProfileRecord>, ContentStoreError> {
        self.lookups.write().unwrap().push(slug.to_string());
        if let Some(err) = self.failure.read().unwrap().clone() {
            return Err(err);
        }
        Ok(self.records.read().unwrap().get(slug).cloned())
    }
}
