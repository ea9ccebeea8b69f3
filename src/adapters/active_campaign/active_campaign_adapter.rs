//! ActiveCampaign CRM adapter.
//!
//! Implements `CrmGateway` against the ActiveCampaign v3 REST API:
//!
//! - `POST /api/3/contacts` creates the contact with four custom fields
//! - `POST /api/3/tags` creates an archetype tag
//! - `POST /api/3/contactTags` attaches the tag to the contact
//!
//! # Configuration
//!
//! ```ignore
//! let config = ActiveCampaignConfig::new("https://acct.api-us1.com", api_token)
//!     .with_timeout(Duration::from_secs(5));
//! let crm = ActiveCampaignAdapter::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::{CrmGateway, DeliveryError, LeadContact};

use super::api_types::{
    ContactBody, ContactEnvelope, ContactResponse, ContactTagBody, ContactTagEnvelope, FieldValue,
    TagBody, TagEnvelope, TagResponse,
};

/// Header carrying the API token.
const API_TOKEN_HEADER: &str = "Api-Token";

/// Custom field ids the quiz outcome is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFieldIds {
    pub primary_archetype: String,
    pub secondary_archetype: String,
    pub quiz_result: String,
    pub quiz_date: String,
}

impl Default for ContactFieldIds {
    fn default() -> Self {
        Self {
            primary_archetype: "1".to_string(),
            secondary_archetype: "2".to_string(),
            quiz_result: "3".to_string(),
            quiz_date: "4".to_string(),
        }
    }
}

/// ActiveCampaign API configuration.
#[derive(Debug, Clone)]
pub struct ActiveCampaignConfig {
    /// Account API URL, e.g. `https://acct.api-us1.com`.
    base_url: String,

    /// API token sent in the `Api-Token` header.
    api_token: SecretString,

    /// Custom field ids for the contact.
    pub fields: ContactFieldIds,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ActiveCampaignConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: SecretString::new(api_token.into()),
            fields: ContactFieldIds::default(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_fields(mut self, fields: ContactFieldIds) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// ActiveCampaign CRM gateway.
pub struct ActiveCampaignAdapter {
    config: ActiveCampaignConfig,
    http_client: Client,
}

impl ActiveCampaignAdapter {
    /// Create a new adapter with the given configuration.
    pub fn new(config: ActiveCampaignConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/3/{}", self.config.base_url, path)
    }

    /// POSTs a JSON body and returns the raw response text on success.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        operation: &'static str,
    ) -> Result<String, DeliveryError> {
        let response = self
            .http_client
            .post(self.url(path))
            .header(API_TOKEN_HEADER, self.config.api_token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| DeliveryError::network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!(
                operation,
                status = status.as_u16(),
                error = %text,
                "ActiveCampaign request failed"
            );
            return Err(DeliveryError::rejected(
                status.as_u16(),
                format!("ActiveCampaign API error: {}", text),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl CrmGateway for ActiveCampaignAdapter {
    async fn upsert_contact(&self, contact: &LeadContact) -> Result<Option<String>, DeliveryError> {
        let fields = &self.config.fields;
        let body = ContactEnvelope {
            contact: ContactBody {
                email: &contact.email,
                first_name: &contact.first_name,
                field_values: vec![
                    FieldValue {
                        field: &fields.primary_archetype,
                        value: &contact.primary_archetype,
                    },
                    FieldValue {
                        field: &fields.secondary_archetype,
                        value: &contact.secondary_archetype,
                    },
                    FieldValue {
                        field: &fields.quiz_result,
                        value: &contact.quiz_result,
                    },
                    FieldValue {
                        field: &fields.quiz_date,
                        value: &contact.quiz_date,
                    },
                ],
            },
        };

        let text = self.post("contacts", &body, "create_contact").await?;
        let parsed: ContactResponse = serde_json::from_str(&text).map_err(|e| {
            DeliveryError::invalid_response(format!("Failed to parse contact response: {}", e))
        })?;

        Ok(parsed.contact.and_then(|c| c.id))
    }

    async fn ensure_tag(&self, tag: &str) -> Result<Option<String>, DeliveryError> {
        let body = TagEnvelope {
            tag: TagBody {
                tag,
                tag_type: "contact",
            },
        };

        let text = self.post("tags", &body, "create_tag").await?;
        let parsed: TagResponse = serde_json::from_str(&text).map_err(|e| {
            DeliveryError::invalid_response(format!("Failed to parse tag response: {}", e))
        })?;

        Ok(parsed.tag.and_then(|t| t.id))
    }

    async fn tag_contact(&self, contact_id: &str, tag_id: &str) -> Result<(), DeliveryError> {
        let body = ContactTagEnvelope {
            contact_tag: ContactTagBody {
                contact: contact_id,
                tag: tag_id,
            },
        };

        self.post("contactTags", &body, "tag_contact").await?;
        Ok(())
    }
}
