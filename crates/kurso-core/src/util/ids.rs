//! ID normalization utilities.
//!
//! Lesson slugs are derived from file names with these helpers, so the slug a
//! client receives in a lesson listing is the same string the slug resolver
//! later matches against the lessons directory.

use std::path::Path;

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses runs of whitespace into single hyphens
///
/// Existing hyphens (including doubled ones) are kept as-is.
///
/// # Examples
///
/// ```
/// use kurso_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Window Functions"), "window-functions");
/// assert_eq!(normalize_id("star_schema"), "star-schema");
/// assert_eq!(normalize_id("Data-Modeling--Star-Schema"), "data-modeling--star-schema");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Compute an ID from a file path's stem.
///
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use kurso_core::util::ids::id_from_path;
///
/// assert_eq!(
///     id_from_path(Path::new("/lessons/SQL-ELT-Concepts--window-functions--2024-10-30.md")),
///     Some("sql-elt-concepts--window-functions--2024-10-30".to_string())
/// );
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(normalize_id)
}
