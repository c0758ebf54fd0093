//! Identity operations — removing a name from the whole graph, or unifying
//! two names into one.
//!
//! Both are whole-collection transformations built on the same mutation
//! idiom as [`super::verify`]: walk every node's four lists, edit in place,
//! report each edit as a [`Diagnostic`].

use tracing::debug;

use super::report::Diagnostic;
use crate::model::{Category, Collection};

// ============================================================================
// remove
// ============================================================================

/// Strip `name` from every category list of every other node, then delete its
/// own record.
///
/// Asking to remove a name with no record is reported and is a no-op, not an
/// error.
pub fn remove(nodes: &mut Collection, name: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    if !nodes.contains_key(name) {
        diags.push(Diagnostic::UnknownIdentity { name: name.to_string() });
        return diags;
    }

    for (other, node) in nodes.iter_mut() {
        if other.as_str() == name {
            continue;
        }
        for category in Category::ALL {
            let list = node.connections.get_mut(category);
            let before = list.len();
            list.retain(|p| p.as_str() != name);
            if list.len() != before {
                diags.push(Diagnostic::RemovedReference {
                    node: other.clone(),
                    category,
                    partner: name.to_string(),
                });
            }
        }
    }

    nodes.remove(name);
    diags.push(Diagnostic::RemovedIdentity { name: name.to_string() });
    debug!(name, "identity removed");
    diags
}

// ============================================================================
// rename / merge
// ============================================================================

/// Replace `old` with `new` everywhere, then re-key or merge `old`'s record.
///
/// In every other node's lists: where a list holds both names the `old` entry
/// is dropped (the identities coincide for that relation); otherwise `old` is
/// rewritten to `new` in place, position preserved.
///
/// If `new` has no record yet, `old`'s record is re-keyed under `new`. If it
/// does, the two are merged per category — each of `old`'s partners not
/// already in `new`'s list is appended — and `old`'s notes are discarded, a
/// documented loss rather than a silent one.
pub fn rename(nodes: &mut Collection, old: &str, new: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    if !nodes.contains_key(old) {
        diags.push(Diagnostic::UnknownIdentity { name: old.to_string() });
        return diags;
    }
    if old == new {
        return diags;
    }

    for (other, node) in nodes.iter_mut() {
        if other.as_str() == old {
            continue;
        }
        for category in Category::ALL {
            let list = node.connections.get_mut(category);
            if !list.iter().any(|p| p.as_str() == old) {
                continue;
            }
            if list.iter().any(|p| p.as_str() == new) {
                list.retain(|p| p.as_str() != old);
                diags.push(Diagnostic::RemovedReference {
                    node: other.clone(),
                    category,
                    partner: old.to_string(),
                });
            } else {
                for p in list.iter_mut() {
                    if p.as_str() == old {
                        *p = new.to_string();
                    }
                }
                diags.push(Diagnostic::ReplacedReference {
                    node: other.clone(),
                    category,
                    old: old.to_string(),
                    new: new.to_string(),
                });
            }
        }
    }

    let Some(mut record) = nodes.remove(old) else {
        return diags;
    };

    if let Some(target) = nodes.get_mut(new) {
        // True merge: union per category, existing entries first.
        for category in Category::ALL {
            let incoming = std::mem::take(record.connections.get_mut(category));
            let dst = target.connections.get_mut(category);
            for partner in incoming {
                if !dst.iter().any(|p| p == &partner) {
                    dst.push(partner);
                }
            }
        }
        diags.push(Diagnostic::MergedIdentity {
            old: old.to_string(),
            new: new.to_string(),
        });
        debug!(old, new, "identities merged");
    } else {
        record.name = new.to_string();
        nodes.insert(new.to_string(), record);
        diags.push(Diagnostic::RenamedIdentity {
            old: old.to_string(),
            new: new.to_string(),
        });
        debug!(old, new, "identity renamed");
    }

    diags
}
