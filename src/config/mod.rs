//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STYLE_QUIZ` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable
//! service with CRM delivery and profile lookups disabled.
//!
//! # Example
//!
//! ```no_run
//! use style_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod content;
mod crm;
mod error;
mod quiz;
mod server;

pub use content::ContentConfig;
pub use crm::CrmConfig;
pub use error::{ConfigError, ValidationError};
pub use quiz::QuizConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// CRM configuration (ActiveCampaign)
    #[serde(default)]
    pub crm: CrmConfig,

    /// Content store configuration (Airtable)
    #[serde(default)]
    pub content: ContentConfig,

    /// Question bank source
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STYLE_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STYLE_QUIZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STYLE_QUIZ__CRM__API_KEY=...` -> `crm.api_key = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STYLE_QUIZ")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Production additionally requires HTTPS for outbound integrations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.crm.validate(&self.server.environment)?;
        self.content.validate(&self.server.environment)?;
        self.quiz.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
