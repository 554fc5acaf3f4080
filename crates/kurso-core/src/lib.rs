//! Kurso Core: shared errors, caching, and filesystem utilities.
//!
//! This crate provides the foundational pieces used across all Kurso crates.
//! It has no internal Kurso dependencies and no course-specific logic.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`cache`]: Time-bounded memoization (`TtlCache`)
//! - [`util`]: File, path, and ID utilities

pub mod cache;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use cache::TtlCache;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::files::{list_markdown_files, read_text_lossy};
pub use util::ids::{id_from_path, normalize_id};
pub use util::resolver::{DirSpec, PathResolver};
