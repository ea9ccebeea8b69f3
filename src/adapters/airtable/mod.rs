//! Airtable content store adapter.
//!
//! Implements the `StyleProfileStore` port. Records are looked up by their
//! `slug` column (`bold`, `bold-natural`, `bold-natural-classic`, ...).

mod airtable_adapter;
mod in_memory_profile_store;

pub use airtable_adapter::{AirtableConfig, AirtableProfileStore};
pub use in_memory_profile_store::InMemoryProfileStore;
