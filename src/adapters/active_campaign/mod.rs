//! ActiveCampaign CRM adapter.
//!
//! Implements the `CrmGateway` port: contact creation with the quiz outcome
//! in custom fields, followed by archetype tagging.
//!
//! # Configuration
//!
//! - `STYLE_QUIZ__CRM__BASE_URL`: account API URL
//! - `STYLE_QUIZ__CRM__API_KEY`: API token

mod active_campaign_adapter;
mod api_types;
mod mock_crm_gateway;

pub use active_campaign_adapter::{ActiveCampaignAdapter, ActiveCampaignConfig, ContactFieldIds};
pub use mock_crm_gateway::{CrmCall, MockCrmGateway};
