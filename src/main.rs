//! Style Quiz HTTP service.
//!
//! Loads configuration from `STYLE_QUIZ__*` environment variables (and `.env`),
//! wires the configured integrations and serves the quiz API.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use style_quiz::adapters::{
    build_router, ActiveCampaignAdapter, AirtableProfileStore, QuizAppState,
};
use style_quiz::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let bank = Arc::new(config.quiz.load_bank()?);
    tracing::info!(questions = bank.len(), "Question bank loaded");

    let mut state = QuizAppState::new(bank);

    match config.crm.adapter_config() {
        Some(crm) => {
            tracing::info!(base_url = %crm.base_url(), "CRM delivery enabled");
            state = state.with_crm(Arc::new(ActiveCampaignAdapter::new(crm)?));
        }
        None => tracing::warn!("CRM not configured; submissions will not be forwarded"),
    }

    match config.content.adapter_config() {
        Some(content) => {
            tracing::info!(table = %content.table_name, "Content store enabled");
            state = state.with_profiles(Arc::new(AirtableProfileStore::new(content)?));
        }
        None => tracing::warn!("Content store not configured; profile lookups will fail"),
    }

    let app = build_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; JSON output in production.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        fmt().json().with_env_filter(filter).with_target(true).init();
    } else {
        fmt().with_env_filter(filter).with_target(true).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
