//! Generic path utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Expand a leading `~` in an already-typed path.
///
/// Non-UTF-8 paths are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_plain_path() {
        assert_eq!(expand_tilde("/srv/lessons"), PathBuf::from("/srv/lessons"));
    }

    #[test]
    fn test_expand_tilde_relative_path() {
        assert_eq!(expand_tilde("lessons"), PathBuf::from("lessons"));
    }

    #[test]
    fn test_expand_tilde_home() {
        let expanded = expand_tilde("~/lessons");
        assert!(expanded.ends_with("lessons"));
    }

    #[test]
    fn test_expand_path_passthrough() {
        let p = Path::new("/data/modules-descriptions");
        assert_eq!(expand_path(p), p.to_path_buf());
    }
}
