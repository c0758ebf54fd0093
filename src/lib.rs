//! # socnetvis — symmetric social-network node files
//!
//! Maintains a collection of per-person JSON records ("nodes") whose
//! relationships must stay mutually consistent: if A lists B as a `good`
//! friend, B must list A back as `good`, a pair never appears under two
//! categories, and a list never holds the same partner twice.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the invariants**: `engine::verify` is the single place
//!    that detects and repairs inconsistencies
//! 2. **Collection is a value**: every operation takes the full name → `Node`
//!    mapping and transforms it — no process-wide state
//! 3. **Diagnostics are output, not errors**: inconsistencies print as
//!    human-readable lines; only malformed files and I/O are `Error`s
//! 4. **Renderer trusts nothing**: only a collection the engine certified
//!    consistent may be rendered
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use socnetvis::{engine, store};
//!
//! # fn example() -> socnetvis::Result<()> {
//! let mut nodes = store::load_dir(".")?;
//! let report = engine::verify(&mut nodes, true);
//! for diag in &report.diagnostics {
//!     println!("{diag}");
//! }
//! if report.consistent {
//!     store::save_dir(".", &nodes)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Relation Categories
//!
//! | Category | Strength | Render weight |
//! |----------|----------|---------------|
//! | `best` | strongest | 4.0 |
//! | `good` | | 2.0 |
//! | `friend` | | 1.0 |
//! | `acquaintance` | weakest | 0.5 |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod engine;
pub mod store;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Category, Collection, Connections, Node, PartnerList};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use engine::{Diagnostic, VerifyReport};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node file failed to parse: missing `name` or `connections`, an
    /// unrecognized or absent category key, or invalid JSON.
    #[error("malformed record in {path}: {message}")]
    MalformedRecord { path: String, message: String },

    /// A collection failed verification where a consistent one is required
    /// (e.g. before rendering).
    #[error("collection is not consistent: {problems} problem(s) found")]
    InconsistentCollection { problems: usize },

    /// A record failed to serialize on save.
    #[error("failed to encode record for {name}: {source}")]
    Encode {
        name: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
