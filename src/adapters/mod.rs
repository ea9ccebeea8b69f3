//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `active_campaign` - CRM gateway (ActiveCampaign v3 API, plus a mock)
//! - `airtable` - Style profile store (Airtable, plus an in-memory store)
//! - `http` - axum routes exposing the quiz

pub mod active_campaign;
pub mod airtable;
pub mod http;

pub use active_campaign::{ActiveCampaignAdapter, ActiveCampaignConfig, MockCrmGateway};
pub use airtable::{AirtableConfig, AirtableProfileStore, InMemoryProfileStore};
pub use http::{build_router, QuizAppState};
