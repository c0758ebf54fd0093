//! # Consistency Engine
//!
//! Detects and (optionally) repairs every way the relationship invariants can
//! break:
//!
//! | Violation | Repair under fix |
//! |-----------|------------------|
//! | Duplicate partner in one list | Drop all but the first occurrence |
//! | Pair listed under two categories | None — reported, left untouched |
//! | Partner with no record | Create an empty node, link back |
//! | Missing reciprocal entry | Append, unless it would force a category |
//!
//! Repairing a dangling reference grows the collection, and the new node's
//! own edges must be checked too, so fix mode repeats the full pass until one
//! completes without modifying anything. Termination: repairs never invent a
//! name that isn't already referenced somewhere, so growth is bounded by the
//! set of distinct partner names in the initial collection.

pub mod identity;
pub mod report;

pub use report::{Diagnostic, VerifyReport};

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{Category, Collection, Node};

// ============================================================================
// verify
// ============================================================================

/// Check every relationship invariant, repairing violations when `fix` is set.
///
/// The collection is exclusively owned by the caller for the duration; in
/// verify-only mode it is left byte-for-byte unchanged.
pub fn verify(nodes: &mut Collection, fix: bool) -> VerifyReport {
    let mut diagnostics = Vec::new();
    let mut passes = 0;

    let consistent = loop {
        passes += 1;
        let outcome = run_pass(nodes, fix, &mut diagnostics);
        debug!(
            pass = passes,
            detections = outcome.detections,
            changed = outcome.changed,
            "verification pass complete"
        );

        if !fix {
            // Duplicates are reported but only conflicts, dangling references,
            // and asymmetries flip the flag in verify-only mode.
            break outcome.hard == 0;
        }
        if !outcome.changed {
            // Fixed point: consistent iff this pass detected nothing at all.
            break outcome.detections == 0;
        }
    };

    VerifyReport { consistent, passes, diagnostics }
}

// ============================================================================
// Single pass
// ============================================================================

struct PassOutcome {
    /// Every detection, duplicates included.
    detections: usize,
    /// Conflicts, dangling references, and asymmetries only.
    hard: usize,
    /// Whether the pass mutated the collection.
    changed: bool,
}

fn run_pass(nodes: &mut Collection, fix: bool, diags: &mut Vec<Diagnostic>) -> PassOutcome {
    let mut outcome = PassOutcome { detections: 0, hard: 0, changed: false };
    // Nodes created this pass for dangling partners; merged in at the end so
    // the iteration order of the current pass stays stable.
    let mut new_nodes = Collection::new();

    let names: Vec<String> = nodes.keys().cloned().collect();
    for name in &names {
        // First category each partner was seen under, across this node's four
        // lists. This is what enforces category exclusivity for the pass.
        let mut seen: HashMap<String, Category> = HashMap::new();

        for category in Category::ALL {
            let partners = match nodes.get(name) {
                Some(node) => node.connections.get(category).clone(),
                None => continue,
            };
            // Indices of duplicate occurrences to drop after the scan.
            let mut drop_at: Vec<usize> = Vec::new();

            for (i, partner) in partners.iter().enumerate() {
                // 1. Duplicate within this list: first occurrence wins.
                if partners[..i].contains(partner) {
                    outcome.detections += 1;
                    diags.push(Diagnostic::Duplicate {
                        node: name.clone(),
                        category,
                        partner: partner.clone(),
                    });
                    if fix {
                        drop_at.push(i);
                        diags.push(Diagnostic::RemovedDuplicate {
                            node: name.clone(),
                            category,
                            partner: partner.clone(),
                        });
                        outcome.changed = true;
                    }
                    continue;
                }

                // 2. Same pair under an earlier category: ambiguous, never
                //    auto-resolved. The pair is skipped for the rest of the pass.
                if let Some(&existing) = seen.get(partner.as_str()) {
                    outcome.detections += 1;
                    outcome.hard += 1;
                    diags.push(Diagnostic::CrossCategoryConflict {
                        node: name.clone(),
                        category,
                        existing,
                        partner: partner.clone(),
                    });
                    continue;
                }
                seen.insert(partner.clone(), category);

                // 3. Dangling reference: no record for the partner.
                let Some(partner_rec) = nodes.get(partner.as_str()) else {
                    outcome.detections += 1;
                    outcome.hard += 1;
                    diags.push(Diagnostic::Dangling {
                        node: name.clone(),
                        category,
                        partner: partner.clone(),
                    });
                    if fix {
                        if !new_nodes.contains_key(partner.as_str()) {
                            diags.push(Diagnostic::CreatedNode { name: partner.clone() });
                        }
                        let staged = new_nodes
                            .entry(partner.clone())
                            .or_insert_with(|| Node::empty(partner.clone()));
                        staged.connections.get_mut(category).push(name.clone());
                        diags.push(Diagnostic::AddedReciprocal {
                            node: partner.clone(),
                            category,
                            partner: name.clone(),
                        });
                        outcome.changed = true;
                    }
                    continue;
                };

                // 4. Asymmetry: the partner exists but doesn't list us back.
                if partner_rec.has_partner(category, name) {
                    continue;
                }
                let reverse_category = partner_rec.connections.category_of(name);
                outcome.detections += 1;
                outcome.hard += 1;
                diags.push(Diagnostic::Asymmetry {
                    node: name.clone(),
                    category,
                    partner: partner.clone(),
                });
                if fix {
                    if let Some(existing) = reverse_category {
                        // Appending would put the pair under two categories on
                        // the partner's side. Report, touch nothing.
                        diags.push(Diagnostic::ReverseConflict {
                            node: name.clone(),
                            category,
                            existing,
                            partner: partner.clone(),
                        });
                    } else if let Some(rec) = nodes.get_mut(partner.as_str()) {
                        rec.connections.get_mut(category).push(name.clone());
                        diags.push(Diagnostic::AddedReciprocal {
                            node: partner.clone(),
                            category,
                            partner: name.clone(),
                        });
                        outcome.changed = true;
                    }
                }
            }

            if fix && !drop_at.is_empty() {
                if let Some(node) = nodes.get_mut(name) {
                    let list = node.connections.get_mut(category);
                    let mut i = 0;
                    list.retain(|_| {
                        let keep = !drop_at.contains(&i);
                        i += 1;
                        keep
                    });
                }
            }
        }
    }

    if fix && !new_nodes.is_empty() {
        debug!(created = new_nodes.len(), "merging nodes created for dangling partners");
        nodes.extend(new_nodes);
    }

    outcome
}
