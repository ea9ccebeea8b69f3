//! Style Quiz - Style Archetype Quiz Service
//!
//! Scores a fixed questionnaire against six style archetypes, classifies the
//! outcome into primary/secondary/tertiary archetypes, forwards leads to a
//! CRM and serves long-form style profiles from a content store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
