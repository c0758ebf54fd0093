//! # Node Model
//!
//! The data types every boundary shares: store ↔ engine ↔ renderer.
//! This module is pure data — no I/O, no state.

pub mod category;
pub mod connections;
pub mod node;

pub use category::Category;
pub use connections::{Connections, PartnerList};
pub use node::Node;

use std::collections::BTreeMap;

/// The full in-memory collection, keyed by node name.
///
/// A `BTreeMap` so that iteration — and therefore every diagnostic the engine
/// emits — comes out in one deterministic order for a given input.
pub type Collection = BTreeMap<String, Node>;
