//! Style profile lookup keys.
//!
//! Long-form profiles are stored under hyphen-joined slugs such as
//! `bold-classic-natural`. When the exact combination has no profile the
//! lookup falls back to `primary-secondary`, then to `primary` alone.

use serde::{Deserialize, Serialize};

use super::{Archetype, QuizError, QuizResult};

/// Archetype combination to look a profile up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLookup {
    pub primary: Archetype,
    pub secondary: Option<Archetype>,
    pub tertiary: Option<Archetype>,
}

impl ProfileLookup {
    pub fn new(
        primary: Archetype,
        secondary: Option<Archetype>,
        tertiary: Option<Archetype>,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// Lookup for a computed result.
    pub fn for_result(result: &QuizResult) -> Self {
        Self::new(result.primary, result.secondary, result.tertiary)
    }

    /// Parses raw query values. `primary` is required; blank values count as
    /// absent.
    pub fn parse(
        primary: Option<&str>,
        secondary: Option<&str>,
        tertiary: Option<&str>,
    ) -> Result<Self, QuizError> {
        let primary = present(primary).ok_or_else(|| QuizError::missing("primary"))?;
        Ok(Self {
            primary: parse_archetype("primary", primary)?,
            secondary: present(secondary)
                .map(|s| parse_archetype("secondary", s))
                .transpose()?,
            tertiary: present(tertiary)
                .map(|s| parse_archetype("tertiary", s))
                .transpose()?,
        })
    }

    /// Exact slug for this combination.
    pub fn slug(&self) -> String {
        let mut slug = self.primary.as_str().to_string();
        for part in [self.secondary, self.tertiary].into_iter().flatten() {
            slug.push('-');
            slug.push_str(part.as_str());
        }
        slug
    }

    /// Slugs to try, most specific first.
    pub fn candidates(&self) -> Vec<String> {
        let mut candidates = vec![self.slug()];
        if let (Some(secondary), Some(_)) = (self.secondary, self.tertiary) {
            candidates.push(format!("{}-{}", self.primary, secondary));
        }
        if self.secondary.is_some() || self.tertiary.is_some() {
            candidates.push(self.primary.as_str().to_string());
        }
        candidates
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_archetype(field: &str, value: &str) -> Result<Archetype, QuizError> {
    value
        .parse::<Archetype>()
        .map_err(|_| QuizError::validation(field, format!("unknown archetype '{}'", value)))
}
