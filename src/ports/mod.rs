//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CrmGateway` - Forwards leads and their archetype tags to the CRM
//! - `StyleProfileStore` - Reads long-form style profiles by slug

mod crm_gateway;
mod style_profile_store;

pub use crm_gateway::{CrmGateway, DeliveryError, DeliveryErrorCode, LeadContact};
pub use style_profile_store::{ContentStoreError, StyleProfileRecord, StyleProfileStore};
