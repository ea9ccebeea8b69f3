//! Archetype catalog.
//!
//! The six style archetypes a respondent can be classified into, in their
//! fixed declaration order. That order is also the tie-break order used when
//! ranking equal scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Style archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Natural,
    Classic,
    Bold,
    Creative,
    Rebellious,
    Romantic,
}

impl Archetype {
    /// All archetypes in catalog declaration order.
    pub const ALL: [Archetype; 6] = [
        Archetype::Natural,
        Archetype::Classic,
        Archetype::Bold,
        Archetype::Creative,
        Archetype::Rebellious,
        Archetype::Romantic,
    ];

    /// Position in the catalog, usable as an array index.
    pub fn index(&self) -> usize {
        match self {
            Archetype::Natural => 0,
            Archetype::Classic => 1,
            Archetype::Bold => 2,
            Archetype::Creative => 3,
            Archetype::Rebellious => 4,
            Archetype::Romantic => 5,
        }
    }

    /// Lowercase identifier as used on the wire and in profile slugs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Natural => "natural",
            Archetype::Classic => "classic",
            Archetype::Bold => "bold",
            Archetype::Creative => "creative",
            Archetype::Rebellious => "rebellious",
            Archetype::Romantic => "romantic",
        }
    }

    /// Identifier with a leading capital, e.g. `Romantic`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Natural => "Natural",
            Archetype::Classic => "Classic",
            Archetype::Bold => "Bold",
            Archetype::Creative => "Creative",
            Archetype::Rebellious => "Rebellious",
            Archetype::Romantic => "Romantic",
        }
    }

    /// Long description shown when this is the primary archetype.
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Natural => {
                "You dress with ease and honesty, favoring comfort and authenticity."
            }
            Archetype::Classic => {
                "Structure, simplicity and timelessness are your anchors in style."
            }
            Archetype::Bold => {
                "You were made to be seen, thriving on statement pieces and vibrant energy."
            }
            Archetype::Creative => {
                "You're a style experimenter who finds joy in unexpected combinations."
            }
            Archetype::Rebellious => {
                "There's a rule-breaking edge to your style that commands attention."
            }
            Archetype::Romantic => "You love clothes that feel graceful, pretty and soft.",
        }
    }

    /// Shorter description shown when this archetype is a secondary influence.
    pub fn influence_description(&self) -> &'static str {
        match self {
            Archetype::Natural => "You value comfort and authenticity in your choices.",
            Archetype::Classic => "You appreciate structure and timeless elegance.",
            Archetype::Bold => "You're drawn to making confident style statements.",
            Archetype::Creative => "You enjoy experimenting with unique combinations.",
            Archetype::Rebellious => "You like to challenge conventional style rules.",
            Archetype::Romantic => "You gravitate toward soft, graceful elements.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::invalid_format("archetype", format!("unknown archetype '{}'", s))
            })
    }
}
