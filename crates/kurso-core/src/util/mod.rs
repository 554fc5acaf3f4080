//! Utility modules for file operations, path handling, and ID computation.
//!
//! # Modules
//!
//! - [`files`]: Async markdown file discovery and reading
//! - [`ids`]: ID and slug normalization
//! - [`paths`]: Tilde expansion for configured paths
//! - [`resolver`]: Candidate-list resolution of content directories

pub mod files;
pub mod ids;
pub mod paths;
pub mod resolver;
