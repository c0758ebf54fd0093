//! # File Store
//!
//! One pretty-printed JSON file per node, all in one directory. The filename
//! is derived from the node name (`Ada Lovelace` → `ADA_LOVELACE.json`), but
//! the `name` field inside the record is the identity key — the collection is
//! keyed by it regardless of what the file happens to be called.
//!
//! The store's contract with the engine:
//! - every loaded record's `name` matches its key in the returned mapping
//! - every record carries exactly the recognized categories (the closed
//!   [`Connections`](crate::model::Connections) shape enforces this at
//!   deserialization — anything else is a [`Error::MalformedRecord`])
//! - saving persists the given mapping verbatim, one file per identity, and
//!   deletes node files for identities no longer present (removed or merged
//!   away).

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use tracing::debug;

use crate::model::{Collection, Node};
use crate::{Error, Result};

/// Filename a node record is stored under.
pub fn node_filename(name: &str) -> String {
    format!("{}.json", name.replace(' ', "_").to_uppercase())
}

// ============================================================================
// Load
// ============================================================================

/// Load every `*.json` file in `dir` into a collection keyed by node name.
///
/// Files are read in sorted path order so load diagnostics are reproducible;
/// the resulting mapping is ordered by name either way. A file that fails to
/// parse aborts the whole load — partial collections are never handed to the
/// engine.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Collection> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut nodes = Collection::new();
    for path in &paths {
        let node = load_file(path)?;
        debug!(file = %path.display(), node = %node.name, "loaded node record");
        nodes.insert(node.name.clone(), node);
    }
    debug!(count = nodes.len(), dir = %dir.display(), "collection loaded");
    Ok(nodes)
}

/// Load and validate a single node file.
pub fn load_file(path: &Path) -> Result<Node> {
    let raw = fs::read_to_string(path)?;
    let node: Node = serde_json::from_str(&raw).map_err(|e| Error::MalformedRecord {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    if node.name.is_empty() {
        return Err(Error::MalformedRecord {
            path: path.display().to_string(),
            message: "record has an empty name".to_string(),
        });
    }
    Ok(node)
}

// ============================================================================
// Save
// ============================================================================

/// Persist the collection: one file per node, plus removal of node files
/// whose identity is gone (deleted or subsumed by a merge).
pub fn save_dir(dir: impl AsRef<Path>, nodes: &Collection) -> Result<()> {
    let dir = dir.as_ref();
    let mut expected: HashSet<String> = HashSet::with_capacity(nodes.len());

    for node in nodes.values() {
        let filename = node_filename(&node.name);
        let body = serde_json::to_string_pretty(node).map_err(|e| Error::Encode {
            name: node.name.clone(),
            source: e,
        })?;
        fs::write(dir.join(&filename), body)?;
        debug!(file = %filename, "wrote node record");
        expected.insert(filename);
    }

    // Stale node files belong to identities that no longer exist. Only files
    // matching the store's own mangling are touched.
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if path.extension().is_some_and(|ext| ext == "json")
            && !expected.contains(filename)
            && filename == node_filename(filename.trim_end_matches(".json"))
        {
            debug!(file = %filename, "removing stale node record");
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Create a node file with no connections, as the `add` command does.
/// Overwrites an existing file of the same name.
pub fn add_empty(dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if name.trim().is_empty() {
        return Err(Error::MalformedRecord {
            path: dir.display().to_string(),
            message: "node name must be non-empty".to_string(),
        });
    }
    let path = dir.join(node_filename(name));
    let node = Node::empty(name);
    let body = serde_json::to_string_pretty(&node).map_err(|e| Error::Encode {
        name: name.to_string(),
        source: e,
    })?;
    fs::write(&path, body)?;
    Ok(path)
}
