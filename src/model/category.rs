//! Relation categories — the closed set of tie strengths.

use serde::{Deserialize, Serialize};

/// Strength of a relationship, strongest first.
///
/// The set is closed: persisted records carrying any other category key are
/// rejected at load time rather than silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Best,
    Good,
    Friend,
    Acquaintance,
}

impl Category {
    /// All categories in descending strength — the canonical iteration order.
    pub const ALL: [Category; 4] = [
        Category::Best,
        Category::Good,
        Category::Friend,
        Category::Acquaintance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Best => "best",
            Category::Good => "good",
            Category::Friend => "friend",
            Category::Acquaintance => "acquaintance",
        }
    }

    /// Edge weight used by the HTML renderer.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Best => 4.0,
            Category::Good => 2.0,
            Category::Friend => 1.0,
            Category::Acquaintance => 0.5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
