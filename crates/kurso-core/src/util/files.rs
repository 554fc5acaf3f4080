//! Async markdown file discovery and reading.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// List the markdown files directly inside `dir`.
///
/// Only regular entries whose name ends in `.md` are returned; subdirectories
/// are not descended into. The result is sorted by file name so callers that
/// pick "the first match" behave the same on every filesystem.
pub async fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        let is_markdown = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".md"));
        if !is_markdown {
            continue;
        }
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if file_type.is_dir() {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("Found {} markdown files in {}", files.len(), dir.display());
    Ok(files)
}

/// Read a text file, replacing invalid UTF-8 sequences.
pub async fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{} is not valid UTF-8; decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
