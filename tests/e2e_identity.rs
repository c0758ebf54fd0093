//! End-to-end tests for identity operations: remove, rename, and merge.

use socnetvis::engine::identity;
use socnetvis::engine::Diagnostic;
use socnetvis::{Category, Collection, Node};

// ============================================================================
// Helpers
// ============================================================================

fn collection(nodes: Vec<Node>) -> Collection {
    nodes.into_iter().map(|n| (n.name.clone(), n)).collect()
}

// ============================================================================
// 1. Remove strips every reference and deletes the record
// ============================================================================

#[test]
fn test_remove_strips_references_everywhere() {
    let mut nodes = collection(vec![
        Node::empty("Ada")
            .with_partner(Category::Best, "Grace")
            .with_partner(Category::Friend, "Linus"),
        Node::empty("Grace").with_partner(Category::Best, "Ada"),
        Node::empty("Linus").with_partner(Category::Friend, "Ada"),
    ]);

    let diags = identity::remove(&mut nodes, "Ada");

    assert!(!nodes.contains_key("Ada"));
    assert!(nodes.get("Grace").unwrap().connections.get(Category::Best).is_empty());
    assert!(nodes.get("Linus").unwrap().connections.get(Category::Friend).is_empty());
    assert!(diags
        .iter()
        .any(|d| matches!(d, Diagnostic::RemovedIdentity { .. })));
}

// ============================================================================
// 2. Remove of an unknown name is a reported no-op
// ============================================================================

#[test]
fn test_remove_unknown_is_noop() {
    let mut nodes = collection(vec![Node::empty("Ada")]);
    let before = nodes.clone();

    let diags = identity::remove(&mut nodes, "Nobody");
    assert_eq!(diags.len(), 1);
    assert!(matches!(diags[0], Diagnostic::UnknownIdentity { .. }));
    assert_eq!(nodes, before);
}

// ============================================================================
// 3. Rename to a fresh name re-keys the record and rewrites references
// ============================================================================

#[test]
fn test_rename_to_fresh_name() {
    let mut nodes = collection(vec![
        Node::empty("Ada").with_partner(Category::Good, "Grace"),
        Node::empty("Grace").with_partner(Category::Good, "Ada"),
    ]);

    let diags = identity::rename(&mut nodes, "Ada", "Countess");

    assert!(!nodes.contains_key("Ada"));
    let countess = nodes.get("Countess").unwrap();
    assert_eq!(countess.name, "Countess");
    assert_eq!(countess.connections.get(Category::Good).as_slice(), ["Grace"]);
    assert_eq!(
        nodes.get("Grace").unwrap().connections.get(Category::Good).as_slice(),
        ["Countess"]
    );
    assert!(diags
        .iter()
        .any(|d| matches!(d, Diagnostic::RenamedIdentity { .. })));
}

// ============================================================================
// 4. Rename onto an existing name merges connections, existing entries first
// ============================================================================

#[test]
fn test_merge_appends_disjoint_partners() {
    let mut old = Node::empty("Ada").with_partner(Category::Friend, "Xeno");
    old.notes = "to be discarded".to_string();
    let mut new = Node::empty("Byron").with_partner(Category::Friend, "Yara");
    new.notes = "kept".to_string();
    let mut nodes = collection(vec![
        old,
        new,
        Node::empty("Xeno").with_partner(Category::Friend, "Ada"),
        Node::empty("Yara").with_partner(Category::Friend, "Byron"),
    ]);

    let diags = identity::rename(&mut nodes, "Ada", "Byron");

    assert!(!nodes.contains_key("Ada"));
    let byron = nodes.get("Byron").unwrap();
    assert_eq!(
        byron.connections.get(Category::Friend).as_slice(),
        ["Yara", "Xeno"],
        "existing entries first, then appended"
    );
    assert_eq!(byron.notes, "kept", "old notes are discarded, not copied");
    assert_eq!(
        nodes.get("Xeno").unwrap().connections.get(Category::Friend).as_slice(),
        ["Byron"]
    );
    assert!(diags
        .iter()
        .any(|d| matches!(d, Diagnostic::MergedIdentity { .. })));
}

// ============================================================================
// 5. A list holding both names keeps only the new one
// ============================================================================

#[test]
fn test_rename_drops_old_when_list_has_both() {
    let mut carol = Node::empty("Carol");
    carol.connections.friend.push("Ada".to_string());
    carol.connections.friend.push("Byron".to_string());
    let mut nodes = collection(vec![
        carol,
        Node::empty("Ada").with_partner(Category::Friend, "Carol"),
        Node::empty("Byron").with_partner(Category::Friend, "Carol"),
    ]);

    identity::rename(&mut nodes, "Ada", "Byron");

    assert_eq!(
        nodes.get("Carol").unwrap().connections.get(Category::Friend).as_slice(),
        ["Byron"],
        "no duplicate after the identities coincide"
    );
}

// ============================================================================
// 6. Merge silently resolves same-category duplicates across the merge
// ============================================================================

#[test]
fn test_merge_skips_partners_already_present() {
    let mut nodes = collection(vec![
        Node::empty("Ada").with_partner(Category::Good, "Xeno"),
        Node::empty("Byron").with_partner(Category::Good, "Xeno"),
        Node::empty("Xeno")
            .with_partner(Category::Good, "Ada")
            .with_partner(Category::Good, "Byron"),
    ]);

    identity::rename(&mut nodes, "Ada", "Byron");

    assert_eq!(
        nodes.get("Byron").unwrap().connections.get(Category::Good).as_slice(),
        ["Xeno"]
    );
    assert_eq!(
        nodes.get("Xeno").unwrap().connections.get(Category::Good).as_slice(),
        ["Byron"]
    );
}

// ============================================================================
// 7. Rename of an unknown name is a reported no-op
// ============================================================================

#[test]
fn test_rename_unknown_is_noop() {
    let mut nodes = collection(vec![Node::empty("Ada")]);
    let before = nodes.clone();

    let diags = identity::rename(&mut nodes, "Nobody", "Someone");
    assert_eq!(diags.len(), 1);
    assert!(matches!(diags[0], Diagnostic::UnknownIdentity { .. }));
    assert_eq!(nodes, before);
}

// ============================================================================
// 8. Rename preserves list position when replacing in place
// ============================================================================

#[test]
fn test_rename_preserves_position() {
    let mut carol = Node::empty("Carol");
    for p in ["Xeno", "Ada", "Yara"] {
        carol.connections.acquaintance.push(p.to_string());
    }
    let mut nodes = collection(vec![
        carol,
        Node::empty("Ada").with_partner(Category::Acquaintance, "Carol"),
        Node::empty("Xeno").with_partner(Category::Acquaintance, "Carol"),
        Node::empty("Yara").with_partner(Category::Acquaintance, "Carol"),
    ]);

    identity::rename(&mut nodes, "Ada", "Beth");

    assert_eq!(
        nodes.get("Carol").unwrap().connections.get(Category::Acquaintance).as_slice(),
        ["Xeno", "Beth", "Yara"]
    );
}
