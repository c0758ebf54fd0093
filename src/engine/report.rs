//! Diagnostics — the human-readable output of verification and repair.
//!
//! Everything here is program output, not an error: a run that finds
//! violations still completes normally and hands the caller the full list.
//! Indented (tab-prefixed) lines are corrective actions taken under fix,
//! printed beneath the problem they address.

use crate::model::Category;

/// One observation made by the engine: either a problem it detected or an
/// action it took to repair one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    // ========================================================================
    // Problems
    // ========================================================================
    /// `partner` appears more than once in `node`'s list for `category`.
    Duplicate {
        node: String,
        category: Category,
        partner: String,
    },

    /// `node` lists `partner` under two categories. Never auto-resolved:
    /// there is no way to know which category is the right one.
    CrossCategoryConflict {
        node: String,
        category: Category,
        existing: Category,
        partner: String,
    },

    /// `partner` has no record in the collection.
    Dangling {
        node: String,
        category: Category,
        partner: String,
    },

    /// `partner` exists but does not list `node` back under `category`.
    Asymmetry {
        node: String,
        category: Category,
        partner: String,
    },

    /// Repairing an asymmetry would force a category: `node` already sits in
    /// `partner`'s list for `existing`, not `category`. Left untouched.
    ReverseConflict {
        node: String,
        category: Category,
        existing: Category,
        partner: String,
    },

    /// An identity operation was asked about a name with no record.
    UnknownIdentity { name: String },

    // ========================================================================
    // Actions (fix mode / identity operations)
    // ========================================================================
    /// A record was created for a dangling partner name.
    CreatedNode { name: String },

    /// `partner` was appended to `node`'s list for `category`, completing a
    /// symmetric edge.
    AddedReciprocal {
        node: String,
        category: Category,
        partner: String,
    },

    /// A repeated occurrence of `partner` was dropped from `node`'s list for
    /// `category` (the first occurrence is authoritative).
    RemovedDuplicate {
        node: String,
        category: Category,
        partner: String,
    },

    /// `partner` was stripped from `node`'s list for `category`.
    RemovedReference {
        node: String,
        category: Category,
        partner: String,
    },

    /// `old` was replaced by `new` in `node`'s list for `category`, position
    /// preserved.
    ReplacedReference {
        node: String,
        category: Category,
        old: String,
        new: String,
    },

    /// An identity's own record was deleted.
    RemovedIdentity { name: String },

    /// An identity's record was re-keyed under a new, previously unused name.
    RenamedIdentity { old: String, new: String },

    /// An identity's connections were unioned into an existing record; its
    /// notes were discarded.
    MergedIdentity { old: String, new: String },
}

impl Diagnostic {
    /// True for detections, false for corrective actions.
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            Diagnostic::Duplicate { .. }
                | Diagnostic::CrossCategoryConflict { .. }
                | Diagnostic::Dangling { .. }
                | Diagnostic::Asymmetry { .. }
                | Diagnostic::ReverseConflict { .. }
                | Diagnostic::UnknownIdentity { .. }
        )
    }

    /// True for the two conflict kinds that are never auto-resolved.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Diagnostic::CrossCategoryConflict { .. } | Diagnostic::ReverseConflict { .. }
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::Duplicate { node, category, partner } => {
                write!(f, "{node}: {partner} appears more than once in list of {category}")
            }
            Diagnostic::CrossCategoryConflict { node, category, existing, partner } => {
                write!(
                    f,
                    "{node}: CONFLICT: {partner} is listed under both {existing} and {category}"
                )
            }
            Diagnostic::Dangling { node, category, partner } => {
                write!(f, "{node}: {category} {partner} is not in list of all nodes")
            }
            Diagnostic::Asymmetry { node, category, partner } => {
                write!(f, "{node}: is not in {partner}'s list of {category}")
            }
            Diagnostic::ReverseConflict { node, existing, partner, .. } => {
                write!(
                    f,
                    "\tCONFLICT: {node} already exists in {partner}'s list of {existing}"
                )
            }
            Diagnostic::UnknownIdentity { name } => {
                write!(f, "{name} is not in list of all nodes")
            }
            Diagnostic::CreatedNode { name } => {
                write!(f, "\tAdding {name} to new nodes")
            }
            Diagnostic::AddedReciprocal { node, category, partner } => {
                write!(f, "\tAdding {partner} to {node}'s list of {category}")
            }
            Diagnostic::RemovedDuplicate { node, category, partner } => {
                write!(f, "\tRemoving duplicate {partner} from {node}'s list of {category}")
            }
            Diagnostic::RemovedReference { node, category, partner } => {
                write!(f, "\tRemoving {partner} from {node}'s list of {category}")
            }
            Diagnostic::ReplacedReference { node, category, old, new } => {
                write!(f, "\tReplacing {old} with {new} in {node}'s list of {category}")
            }
            Diagnostic::RemovedIdentity { name } => {
                write!(f, "Removing node {name}")
            }
            Diagnostic::RenamedIdentity { old, new } => {
                write!(f, "Renaming {old} to {new}")
            }
            Diagnostic::MergedIdentity { old, new } => {
                write!(f, "Merging {old} into {new} (notes of {old} are discarded)")
            }
        }
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    /// Whether the collection satisfies every invariant. Under fix this means
    /// a full pass completed with zero detections; verify-only, that the
    /// single pass saw no conflict, dangling reference, or asymmetry.
    pub consistent: bool,

    /// Number of full passes run before reaching the fixed point.
    pub passes: usize,

    /// Every detection and corrective action, in deterministic order.
    pub diagnostics: Vec<Diagnostic>,
}

impl VerifyReport {
    pub fn problems(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_problem()).count()
    }

    pub fn conflicts(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_conflict()).count()
    }
}
