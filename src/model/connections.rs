//! Per-category partner lists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::Category;

/// An ordered list of partner names within one category.
///
/// Order matters: on duplicate entries the first occurrence is authoritative,
/// and diagnostics must come out in list order. Uniqueness is an invariant the
/// engine enforces, not something the container guarantees.
pub type PartnerList = SmallVec<[String; 8]>;

/// The four category lists of one node.
///
/// Exactly these keys, always all present — a record missing one, or carrying
/// an extra key, is malformed and fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connections {
    pub best: PartnerList,
    pub good: PartnerList,
    pub friend: PartnerList,
    pub acquaintance: PartnerList,
}

impl Connections {
    pub fn get(&self, category: Category) -> &PartnerList {
        match category {
            Category::Best => &self.best,
            Category::Good => &self.good,
            Category::Friend => &self.friend,
            Category::Acquaintance => &self.acquaintance,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut PartnerList {
        match category {
            Category::Best => &mut self.best,
            Category::Good => &mut self.good,
            Category::Friend => &mut self.friend,
            Category::Acquaintance => &mut self.acquaintance,
        }
    }

    /// Iterate (category, list) pairs in descending strength order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &PartnerList)> {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// The category under which `partner` appears, if any.
    pub fn category_of(&self, partner: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&c| self.get(c).iter().any(|p| p.as_str() == partner))
    }

    /// Total number of entries across all categories.
    pub fn degree(&self) -> usize {
        Category::ALL.iter().map(|&c| self.get(c).len()).sum()
    }
}
