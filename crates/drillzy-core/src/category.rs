//! The four skill archetypes a user can be assigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user archetype, assigned once per survey submission.
///
/// Serialized as a lowercase string ("thinker", "builder", ...), matching
/// the values stored in the profiles and skills tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Thinker,
    Builder,
    Creator,
    Connector,
}

impl Category {
    /// Canonical ordering of the archetypes.
    ///
    /// Survey tally ties resolve to the earliest entry in this array.
    pub const ALL: [Category; 4] = [
        Category::Thinker,
        Category::Builder,
        Category::Creator,
        Category::Connector,
    ];

    /// Lowercase storage label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Thinker => "thinker",
            Category::Builder => "builder",
            Category::Creator => "creator",
            Category::Connector => "connector",
        }
    }

    /// Capitalized label for user-facing text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Thinker => "Thinker",
            Category::Builder => "Builder",
            Category::Creator => "Creator",
            Category::Connector => "Connector",
        }
    }

    /// Parse a storage label. Returns `None` for anything outside the
    /// four-archetype set.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thinker" => Some(Category::Thinker),
            "builder" => Some(Category::Builder),
            "creator" => Some(Category::Creator),
            "connector" => Some(Category::Connector),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
