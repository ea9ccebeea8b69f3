//! Airtable style profile store.
//!
//! Profiles live in one table with a `slug` column. Lookups use
//! `filterByFormula` and ask for a single record.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{ContentStoreError, StyleProfileRecord, StyleProfileStore};

/// Airtable API configuration.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Personal access token, sent as a bearer token.
    api_key: SecretString,

    /// Base (workspace) id, e.g. `appXXXXXXXXXXXXXX`.
    pub base_id: String,

    /// Table holding the profiles.
    pub table_name: String,

    /// API root (default: https://api.airtable.com).
    pub api_base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl AirtableConfig {
    pub fn new(api_key: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_id: base_id.into(),
            table_name: "Style Profiles".to_string(),
            api_base_url: "https://api.airtable.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    #[serde(default)]
    records: Vec<StyleProfileRecord>,
}

/// `StyleProfileStore` backed by an Airtable table.
pub struct AirtableProfileStore {
    config: AirtableConfig,
    http_client: Client,
}

impl AirtableProfileStore {
    pub fn new(config: AirtableConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// `{api_base_url}/v0/{base_id}/{table_name}` with each segment encoded.
    fn table_url(&self) -> Result<Url, ContentStoreError> {
        let mut url = Url::parse(&self.config.api_base_url)
            .map_err(|e| ContentStoreError::Network(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ContentStoreError::Network("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("v0")
            .push(&self.config.base_id)
            .push(&self.config.table_name);
        Ok(url)
    }
}

/// Formula matching the `slug` column exactly.
pub(crate) fn slug_formula(slug: &str) -> String {
    let escaped = slug.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{{slug}} = \"{}\"", escaped)
}

#[async_trait]
impl StyleProfileStore for AirtableProfileStore {
    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<StyleProfileRecord>, ContentStoreError> {
        let url = self.table_url()?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.config.api_key.expose_secret())
            .query(&[
                ("filterByFormula", slug_formula(slug).as_str()),
                ("maxRecords", "1"),
            ])
            .send()
            .await
            .map_err(|e| ContentStoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                slug,
                status = status.as_u16(),
                error = %error_text,
                "Airtable lookup failed"
            );
            return Err(ContentStoreError::Rejected {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: ListRecordsResponse = response
            .json()
            .await
            .map_err(|e| ContentStoreError::InvalidResponse(e.to_string()))?;

        Ok(body.records.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Fake table holding one `bold-natural` record.
    async fn fake_table(
        Path((base, table)): Path<(String, String)>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> axum::response::Response {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer key" {
            return (StatusCode::UNAUTHORIZED, "no").into_response();
        }
        assert_eq!(base, "app1");
        assert_eq!(table, "Style Profiles");
        assert_eq!(query.get("maxRecords").map(String::as_str), Some("1"));

        let records = if query.get("filterByFormula").map(String::as_str)
            == Some(r#"{slug} = "bold-natural""#)
        {
            json!([{"id": "rec1", "fields": {"slug": "bold-natural", "title": "Bold + Natural"}}])
        } else {
            json!([])
        };
        Json(json!({ "records": records })).into_response()
    }

    async fn store(key: &str) -> AirtableProfileStore {
        let base = serve(Router::new().route("/v0/:base/:table", get(fake_table))).await;
        AirtableProfileStore::new(AirtableConfig::new(key, "app1").with_base_url(base)).unwrap()
    }

    #[tokio::test]
    async fn finds_record_by_slug() {
        let store = store("key").await;
        let record = store.find_by_slug("bold-natural").await.unwrap().unwrap();
        assert_eq!(record.id, "rec1");
        assert_eq!(record.fields["title"], "Bold + Natural");
    }

    #[tokio::test]
    async fn missing_slug_is_none() {
        let store = store("key").await;
        assert!(store.find_by_slug("bold").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejected_request_is_error() {
        let store = store("wrong").await;
        let err = store.find_by_slug("bold").await.unwrap_err();
        assert!(matches!(err, ContentStoreError::Rejected { status: 401, .. }));
    }

    #[test]
    fn formula_escapes_quotes() {
        assert_eq!(slug_formula("bold"), r#"{slug} = "bold""#);
        assert_eq!(slug_formula(r#"a"b"#), r#"{slug} = "a\"b""#);
    }

    #[test]
    fn table_url_encodes_segments() {
        let store =
            AirtableProfileStore::new(AirtableConfig::new("k", "app1").with_base_url("http://x/"))
                .unwrap();
        assert_eq!(
            store.table_url().unwrap().as_str(),
            "http://x/v0/app1/Style%20Profiles"
        );
    }
}
