//! Error types for kurso-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for kurso-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kurso-core and the crates built on it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate locations for a content directory exist.
    #[error("{kind} directory not found. Checked paths: {}", join_paths(tried))]
    DirectoryMissing {
        /// Which directory was being resolved (e.g. "lessons")
        kind: String,
        /// Every path that was checked, in order
        tried: Vec<PathBuf>,
    },

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A module identifier outside the `module-1` .. `module-20` range.
    #[error("Invalid module id: {0}")]
    InvalidModuleId(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Create a directory-missing error.
    pub fn directory_missing(kind: impl Into<String>, tried: Vec<PathBuf>) -> Self {
        Error::DirectoryMissing {
            kind: kind.into(),
            tried,
        }
    }

    /// Returns `true` for errors caused by missing content rather than
    /// failing I/O.
    pub fn is_missing_content(&self) -> bool {
        matches!(self, Error::DirectoryMissing { .. })
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_missing_lists_paths() {
        let err = Error::directory_missing(
            "Lessons",
            vec![PathBuf::from("/a/lessons"), PathBuf::from("/b/lessons")],
        );
        assert_eq!(
            err.to_string(),
            "Lessons directory not found. Checked paths: /a/lessons, /b/lessons"
        );
        assert!(err.is_missing_content());
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(io, "/tmp/lesson.md");
        assert!(err.to_string().contains("/tmp/lesson.md"));
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_missing_content());
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad port");
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
