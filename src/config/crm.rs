//! CRM configuration (ActiveCampaign)

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::active_campaign::{ActiveCampaignConfig, ContactFieldIds};

/// CRM configuration. Lead delivery is disabled unless both `base_url` and
/// `api_key` are set.
#[derive(Clone, Deserialize)]
pub struct CrmConfig {
    /// Account API URL, e.g. `https://acct.api-us1.com`
    pub base_url: Option<String>,

    /// API token
    pub api_key: Option<String>,

    #[serde(default = "default_field_primary")]
    pub field_primary_archetype: String,

    #[serde(default = "default_field_secondary")]
    pub field_secondary_archetype: String,

    #[serde(default = "default_field_result")]
    pub field_quiz_result: String,

    #[serde(default = "default_field_date")]
    pub field_quiz_date: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CrmConfig {
    pub fn is_configured(&self) -> bool {
        present(&self.base_url).is_some() && present(&self.api_key).is_some()
    }

    /// Adapter configuration, `None` when delivery is disabled.
    pub fn adapter_config(&self) -> Option<ActiveCampaignConfig> {
        let base_url = present(&self.base_url)?;
        let api_key = present(&self.api_key)?;
        Some(
            ActiveCampaignConfig::new(base_url, api_key)
                .with_fields(ContactFieldIds {
                    primary_archetype: self.field_primary_archetype.clone(),
                    secondary_archetype: self.field_secondary_archetype.clone(),
                    quiz_result: self.field_quiz_result.clone(),
                    quiz_date: self.field_quiz_date.clone(),
                })
                .with_timeout(Duration::from_secs(self.timeout_secs)),
        )
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout("crm.timeout_secs"));
        }
        for (name, value) in [
            ("crm.field_primary_archetype", &self.field_primary_archetype),
            ("crm.field_secondary_archetype", &self.field_secondary_archetype),
            ("crm.field_quiz_result", &self.field_quiz_result),
            ("crm.field_quiz_date", &self.field_quiz_date),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyFieldId(name));
            }
        }

        if let Some(url) = present(&self.base_url) {
            let is_https = url.starts_with("https://");
            if !is_https && !url.starts_with("http://") {
                return Err(ValidationError::InvalidUrl("crm.base_url"));
            }
            if *environment == Environment::Production && !is_https {
                return Err(ValidationError::MustBeHttps("crm.base_url"));
            }
        }
        Ok(())
    }
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            field_primary_archetype: default_field_primary(),
            field_secondary_archetype: default_field_secondary(),
            field_quiz_result: default_field_result(),
            field_quiz_date: default_field_date(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for CrmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("field_primary_archetype", &self.field_primary_archetype)
            .field("field_secondary_archetype", &self.field_secondary_archetype)
            .field("field_quiz_result", &self.field_quiz_result)
            .field("field_quiz_date", &self.field_quiz_date)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn default_field_primary() -> String {
    "1".to_string()
}

fn default_field_secondary() -> String {
    "2".to_string()
}

fn default_field_result() -> String {
    "3".to_string()
}

fn default_field_date() -> String {
    "4".to_string()
}

fn default_timeout() -> u64 {
    10
}
