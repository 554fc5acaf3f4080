//! Section and list extraction helpers.
//!
//! Module description documents are organised under fixed `## Heading`
//! markers. [`extract_section`] walks the document once with a small line
//! scanner and returns the lines belonging to one section; the list helpers
//! then pull items out of those lines.
//!
//! # Key Functions
//!
//! - [`extract_section`]: Lines between `## Heading` and the next `## `
//! - [`bold_lead`]: The bold lead of a `- **Item**: text` bullet
//! - [`list_item_text`]: The text of a `- item` bullet
//! - [`strip_bold`]: Remove `**` markers
//! - [`normalize_line_endings`]: `\r\n` and lone `\r` to `\n`
//!
//! # Example
//!
//! ```rust
//! use kurso_content::markdown::helpers::{bold_lead, extract_section};
//!
//! let content = "## Prerequisites\n\n- **Module 1**: Data fundamentals\n\n## Learning Objectives\n";
//!
//! let lines = extract_section(content, "Prerequisites").unwrap();
//! let prereqs: Vec<_> = lines.iter().filter_map(|l| bold_lead(l)).collect();
//! assert_eq!(prereqs, vec!["Module 1"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static BOLD_LEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s\*\*(.*?)\*\*").expect("Invalid bold lead regex"));

/// Scanner position while looking for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the section's heading line.
    Seeking,
    /// Collecting lines until the next `## ` heading.
    InSection,
    /// The section has ended; remaining lines are ignored.
    Done,
}

/// Extract the lines of a `## `-level section.
///
/// The section starts after the first line whose trimmed text is exactly
/// `## {heading}` and runs up to (not including) the next line that starts
/// with `## `, or to the end of the document. Deeper headings (`###`) stay
/// inside the section.
///
/// Heading matching is exact and case-sensitive. Returns `None` when the
/// heading never appears; a present but empty section yields `Some(vec![])`.
///
/// # Example
///
/// ```rust
/// use kurso_content::markdown::helpers::extract_section;
///
/// let content = "## Intro\n\nHello.\n\n### Detail\n\nMore.\n\n## Next\n\nBye.";
/// let lines = extract_section(content, "Intro").unwrap();
/// assert!(lines.contains(&"Hello."));
/// assert!(lines.contains(&"### Detail"));
/// assert!(!lines.contains(&"Bye."));
///
/// assert!(extract_section(content, "intro").is_none());
/// ```
pub fn extract_section<'a>(content: &'a str, heading: &str) -> Option<Vec<&'a str>> {
    let marker = format!("## {heading}");
    let mut state = ScanState::Seeking;
    let mut lines = Vec::new();

    for line in content.lines() {
        state = match state {
            ScanState::Seeking if line.trim() == marker => ScanState::InSection,
            ScanState::Seeking => ScanState::Seeking,
            ScanState::InSection if line.starts_with("## ") => ScanState::Done,
            ScanState::InSection => {
                lines.push(line);
                ScanState::InSection
            }
            ScanState::Done => break,
        };
    }

    match state {
        ScanState::Seeking => None,
        ScanState::InSection | ScanState::Done => Some(lines),
    }
}

/// Return the bold lead of a `- **Item**...` bullet, trimmed.
///
/// Lines without a closed bold span directly after the bullet yield `None`,
/// as does an empty lead.
///
/// # Example
///
/// ```rust
/// use kurso_content::markdown::helpers::bold_lead;
///
/// assert_eq!(bold_lead("- **Star Schema** - facts and dimensions"), Some("Star Schema"));
/// assert_eq!(bold_lead("  - **Nested**"), Some("Nested"));
/// assert_eq!(bold_lead("- plain item"), None);
/// ```
pub fn bold_lead(line: &str) -> Option<&str> {
    BOLD_LEAD_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// Return the text of a `- item` bullet, trimmed.
///
/// Leading indentation is ignored.
///
/// # Example
///
/// ```rust
/// use kurso_content::markdown::helpers::list_item_text;
///
/// assert_eq!(list_item_text("- Design a star schema "), Some("Design a star schema"));
/// assert_eq!(list_item_text("Not a list item"), None);
/// ```
pub fn list_item_text(line: &str) -> Option<&str> {
    line.trim_start()
        .strip_prefix("- ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Remove every `**` bold marker from `text`.
pub fn strip_bold(text: &str) -> String {
    text.replace("**", "")
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // normalize_line_endings tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_line_endings("\r\r"), "\n\n");
        assert_eq!(normalize_line_endings("plain"), "plain");
    }

    // ------------------------------------------------------------------------
    // extract_section tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_section_basic() {
        let content = "# Module\n\n## Prerequisites\n\n- **Module 1**\n\n## Learning Objectives\n\n- Learn\n";
        let lines = extract_section(content, "Prerequisites").unwrap();
        assert_eq!(lines, vec!["", "- **Module 1**", ""]);
    }

    #[test]
    fn test_extract_section_runs_to_end_of_document() {
        let content = "## Skills Assessment\n- ✅ One\n- ✅ Two";
        let lines = extract_section(content, "Skills Assessment").unwrap();
        assert_eq!(lines, vec!["- ✅ One", "- ✅ Two"]);
    }

    #[test]
    fn test_extract_section_keeps_subsections() {
        let content = "## Topics Covered\n### Basics\n- **A**\n### Advanced\n- **B**\n## Next Steps\n";
        let lines = extract_section(content, "Topics Covered").unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "### Advanced");
    }

    #[test]
    fn test_extract_section_missing_heading() {
        let content = "## Learning Objectives\n- Learn";
        assert!(extract_section(content, "Prerequisites").is_none());
    }

    #[test]
    fn test_extract_section_heading_is_exact() {
        let content = "## Prerequisites and Setup\n- **Module 1**";
        assert!(extract_section(content, "Prerequisites").is_none());

        let content = "### Prerequisites\n- **Module 1**";
        assert!(extract_section(content, "Prerequisites").is_none());
    }

    #[test]
    fn test_extract_section_trims_heading_line() {
        let content = "  ## Prerequisites  \n- **Module 1**\n";
        let lines = extract_section(content, "Prerequisites").unwrap();
        assert_eq!(lines, vec!["- **Module 1**"]);
    }

    #[test]
    fn test_extract_section_empty() {
        let content = "## Prerequisites\n## Learning Objectives\n- Learn";
        assert_eq!(extract_section(content, "Prerequisites"), Some(vec![]));
    }

    #[test]
    fn test_extract_section_first_occurrence_only() {
        let content = "## Next Steps\n- one\n## Other\n## Next Steps\n- two\n";
        assert_eq!(extract_section(content, "Next Steps"), Some(vec!["- one"]));
    }

    // ------------------------------------------------------------------------
    // list helper tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_bold_lead_with_trailing_text() {
        assert_eq!(
            bold_lead("- **Module 1: Data Fundamentals** - Required"),
            Some("Module 1: Data Fundamentals")
        );
    }

    #[test]
    fn test_bold_lead_rejects_unclosed_and_empty() {
        assert_eq!(bold_lead("- **Unclosed"), None);
        assert_eq!(bold_lead("- ****"), None);
        assert_eq!(bold_lead("-**No space**"), None);
    }

    #[test]
    fn test_list_item_text_nested() {
        assert_eq!(list_item_text("    - nested item"), Some("nested item"));
        assert_eq!(list_item_text("- "), None);
        assert_eq!(list_item_text("* star bullet"), None);
    }

    #[test]
    fn test_strip_bold() {
        assert_eq!(strip_bold("Review **Module 5** next"), "Review Module 5 next");
        assert_eq!(strip_bold("plain"), "plain");
    }
}
