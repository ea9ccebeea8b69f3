//! Content store configuration (Airtable)

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::airtable::AirtableConfig;

/// Content store configuration. Profile lookups fail with a server error
/// unless both `api_key` and `base_id` are set.
#[derive(Clone, Deserialize)]
pub struct ContentConfig {
    /// Personal access token
    pub api_key: Option<String>,

    /// Base id (`app...`)
    pub base_id: Option<String>,

    /// Table holding the profiles
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// API root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ContentConfig {
    pub fn is_configured(&self) -> bool {
        self.adapter_config().is_some()
    }

    /// Adapter configuration, `None` when the store is not configured.
    pub fn adapter_config(&self) -> Option<AirtableConfig> {
        let api_key = present(&self.api_key)?;
        let base_id = present(&self.base_id)?;
        Some(
            AirtableConfig::new(api_key, base_id)
                .with_table(self.table_name.clone())
                .with_base_url(self.api_base_url.clone())
                .with_timeout(Duration::from_secs(self.timeout_secs)),
        )
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.table_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("content.table_name"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout("content.timeout_secs"));
        }
        let is_https = self.api_base_url.starts_with("https://");
        if !is_https && !self.api_base_url.starts_with("http://") {
            return Err(ValidationError::InvalidUrl("content.api_base_url"));
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::MustBeHttps("content.api_base_url"));
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_id: None,
            table_name: default_table_name(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for ContentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn default_table_name() -> String {
    "Style Profiles".to_string()
}

fn default_api_base_url() -> String {
    "https://api.airtable.com".to_string()
}

fn default_timeout() -> u64 {
    10
}
