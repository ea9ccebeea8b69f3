//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Archetype catalog, question bank, scoring engine and quiz flow

pub mod foundation;
pub mod quiz;
