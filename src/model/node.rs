//! A node — one person's record.

use serde::{Deserialize, Serialize};
use super::{Category, Connections};

/// A named identity with free-text notes and categorized partner lists.
///
/// The `name` is the identity key: unique within a collection, and the store
/// keeps the map key and this field in lockstep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub notes: String,
    pub connections: Connections,
}

impl Node {
    /// A node with no connections in any category and empty notes — the shape
    /// `add` creates and the engine stages for dangling references.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: String::new(),
            connections: Connections::default(),
        }
    }

    pub fn with_partner(mut self, category: Category, partner: impl Into<String>) -> Self {
        self.connections.get_mut(category).push(partner.into());
        self
    }

    pub fn has_partner(&self, category: Category, partner: &str) -> bool {
        self.connections.get(category).iter().any(|p| p.as_str() == partner)
    }
}
