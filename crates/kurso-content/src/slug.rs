//! Slug to lesson file resolution.
//!
//! Clients address a lesson by one or more path segments, which may be the
//! lesson's exact slug or just a few words from its file name. Resolution
//! runs over the sorted `.md` file names of the lessons directory:
//!
//! 1. The segments are joined with `-` and lowercased into the slug string.
//! 2. Pass one: a file whose normalized stem equals the slug string wins
//!    outright; otherwise the first file whose lowercased name contains the
//!    slug string or any single segment.
//! 3. Pass two, only if pass one found nothing: the first file whose name
//!    contains any segment longer than three characters.
//!
//! Because the file names are sorted, the same request always resolves to
//! the same file.

use std::path::{Path, PathBuf};

use kurso_core::{Result, id_from_path, list_markdown_files};

/// Split a slug path such as `sql/window-functions/` into lowercase
/// segments, dropping empty ones.
///
/// ```rust
/// use kurso_content::slug::split_slug_path;
///
/// assert_eq!(split_slug_path("SQL//Window-Functions/"), vec!["sql", "window-functions"]);
/// assert!(split_slug_path("/").is_empty());
/// ```
pub fn split_slug_path(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Pick the file name matching `segments` from `filenames`.
///
/// `filenames` are checked in the order given; pass them sorted for a
/// stable result. Returns `None` for an empty segment list.
///
/// # Example
///
/// ```rust
/// use kurso_content::slug::resolve_slug;
///
/// let files = vec!["module-1-intro.md".to_string(), "module-2-sql.md".to_string()];
/// assert_eq!(resolve_slug(&["intro"], &files), Some("module-1-intro.md"));
/// assert_eq!(resolve_slug(&["nonexistent"], &files), None);
/// ```
pub fn resolve_slug<'a, S: AsRef<str>>(segments: &[S], filenames: &'a [String]) -> Option<&'a str> {
    let segments: Vec<String> = segments
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return None;
    }
    let slug = segments.join("-");

    let lowered: Vec<(&str, String)> = filenames
        .iter()
        .map(|name| (name.as_str(), name.to_lowercase()))
        .collect();

    let exact = lowered
        .iter()
        .find(|(name, _)| id_from_path(Path::new(name)).is_some_and(|stem| stem == slug));
    if let Some((name, _)) = exact {
        return Some(*name);
    }

    let pass_one = lowered.iter().find(|(_, lower)| {
        lower.contains(&slug) || segments.iter().any(|segment| lower.contains(segment.as_str()))
    });
    if let Some((name, _)) = pass_one {
        return Some(*name);
    }

    // Subsumed by pass one, which already accepts any single segment; kept
    // as the explicit last step of the resolution order.
    lowered
        .iter()
        .find(|(_, lower)| {
            segments
                .iter()
                .any(|segment| segment.chars().count() > 3 && lower.contains(segment.as_str()))
        })
        .map(|(name, _)| *name)
}

/// Find the lesson file in `dir` matching `segments`.
///
/// Returns `Ok(None)` when nothing matches; errors only when the directory
/// cannot be listed.
pub async fn find_lesson_file<S: AsRef<str>>(dir: &Path, segments: &[S]) -> Result<Option<PathBuf>> {
    let files = list_markdown_files(dir).await?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .map(str::to_string)
        .collect();

    let found = resolve_slug(segments, &names).map(|name| dir.join(name));
    match &found {
        Some(path) => log::debug!("Slug resolved to {}", path.display()),
        None => log::debug!(
            "No lesson matches slug {:?}",
            segments.iter().map(|s| s.as_ref()).collect::<Vec<&str>>()
        ),
    }
    Ok(found)
}
