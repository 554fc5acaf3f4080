//! Markdown structure parsing with `pulldown-cmark`.
//!
//! Lessons are loosely structured prose, so only two structural features are
//! read through a real parser:
//!
//! - the first prose paragraph, used as a lesson's short description
//! - the text of every heading at a given level, used as lesson topics
//!
//! Field extraction that depends on exact textual markers (titles, complexity
//! tags) lives in [`crate::lesson`] and uses regular expressions instead.
//!
//! # Example
//!
//! ```rust
//! use kurso_content::markdown::parser::{extract_first_paragraph, extract_headings};
//! use pulldown_cmark::HeadingLevel;
//!
//! let content = "# Window Functions\n\n**Complexity Level:** [I]\n\nRank rows without collapsing them.\n\n## ROW_NUMBER\n\n## RANK vs DENSE_RANK\n";
//!
//! let summary = extract_first_paragraph(content, 200).unwrap();
//! assert_eq!(summary, "Rank rows without collapsing them.");
//!
//! let topics = extract_headings(content, HeadingLevel::H2);
//! assert_eq!(topics, vec!["ROW_NUMBER", "RANK vs DENSE_RANK"]);
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the first prose paragraph from markdown content.
///
/// Headings and list items are skipped, as are paragraphs that open with
/// bold text: those are metadata lines such as `**Complexity Level:** [F]`.
/// Inline formatting is stripped and the result is truncated to `max_chars`
/// characters at a word boundary, with `...` appended when shortened.
///
/// # Example
///
/// ```rust
/// use kurso_content::markdown::parser::extract_first_paragraph;
///
/// let content = "# Title\n\nThis is a **bold** introduction.\n\nMore content.";
/// let paragraph = extract_first_paragraph(content, 50).unwrap();
/// assert_eq!(paragraph, "This is a bold introduction.");
/// ```
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_heading = false;
    let mut item_depth = 0usize;
    let mut in_paragraph = false;
    let mut at_paragraph_start = false;
    let mut skip_paragraph = false;
    let mut paragraph_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,
            Event::Start(Tag::Item) => item_depth += 1,
            Event::End(TagEnd::Item) => item_depth = item_depth.saturating_sub(1),

            Event::Start(Tag::Paragraph) if !in_heading && item_depth == 0 => {
                in_paragraph = true;
                at_paragraph_start = true;
                skip_paragraph = false;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                in_paragraph = false;
                let trimmed = paragraph_text.trim();
                if !skip_paragraph && !trimmed.is_empty() {
                    return Some(truncate_text(&normalize_whitespace(trimmed), max_chars));
                }
            }

            Event::Start(Tag::Strong) if in_paragraph && at_paragraph_start => {
                skip_paragraph = true;
            }
            Event::Text(text) | Event::Code(text) if in_paragraph => {
                at_paragraph_start = false;
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Extract the text of every heading at `level`, in document order.
///
/// Inline formatting is stripped from heading text. Empty headings are
/// dropped; duplicates are kept.
///
/// # Example
///
/// ```rust
/// use kurso_content::markdown::parser::extract_headings;
/// use pulldown_cmark::HeadingLevel;
///
/// let content = "# Title\n\n## Using `QUALIFY`\n\n### Detail\n\n## Pitfalls";
/// assert_eq!(
///     extract_headings(content, HeadingLevel::H2),
///     vec!["Using QUALIFY", "Pitfalls"]
/// );
/// ```
pub fn extract_headings(content: &str, level: HeadingLevel) -> Vec<String> {
    let mut headings = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level: l, .. }) if l == level => {
                current = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = current.take() {
                    let text = normalize_whitespace(&text);
                    if !text.is_empty() {
                        headings.push(text);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buf) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

/// Truncate text to at most `max_chars` characters, adding "..." if
/// truncated.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let truncate_at = head.rfind(char::is_whitespace).unwrap_or(cut);

    format!("{}...", head[..truncate_at].trim_end())
}

/// Collapse runs of whitespace into single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // extract_first_paragraph tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_paragraph_after_heading() {
        let content = "# Title\n\nThis is the first paragraph.\n\nSecond paragraph.";
        let paragraph = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(paragraph, "This is the first paragraph.");
    }

    #[test]
    fn test_extract_paragraph_skips_metadata_lines() {
        let content = "# Star Schema\n\n**Complexity Level:** [F]\n**Estimated Time:** 30 minutes\n\nFacts in the middle, dimensions around.\n";
        let paragraph = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(paragraph, "Facts in the middle, dimensions around.");
    }

    #[test]
    fn test_extract_paragraph_keeps_inline_bold() {
        let content = "A **fact table** stores measurements.";
        let paragraph = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(paragraph, "A fact table stores measurements.");
    }

    #[test]
    fn test_extract_paragraph_joins_soft_breaks() {
        let content = "# Title\n\nFirst line\nsecond line.";
        let paragraph = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(paragraph, "First line second line.");
    }

    #[test]
    fn test_extract_paragraph_truncation() {
        let content = "# Title\n\nThis is a longer paragraph that should be truncated.\n\nMore.";
        let paragraph = extract_first_paragraph(content, 20).unwrap();
        assert_eq!(paragraph, "This is a longer...");
    }

    #[test]
    fn test_extract_paragraph_truncation_multibyte() {
        let content = "Données é é é é é é é é é é é é";
        let paragraph = extract_first_paragraph(content, 10).unwrap();
        assert!(paragraph.ends_with("..."));
        assert!(paragraph.starts_with("Données"));
    }

    #[test]
    fn test_extract_paragraph_no_paragraph() {
        assert!(extract_first_paragraph("# Only a heading\n\n## Another", 100).is_none());
        assert!(extract_first_paragraph("", 100).is_none());
    }

    #[test]
    fn test_extract_paragraph_ignores_lists_and_code() {
        let content = "# Title\n\n- item one\n\n```sql\nSELECT 1;\n```\n\nActual prose.";
        let paragraph = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(paragraph, "Actual prose.");
    }

    // ------------------------------------------------------------------------
    // extract_headings tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_headings_only_requested_level() {
        let content = "# Title\n\n## One\n\n### Nested\n\n## Two\n";
        assert_eq!(extract_headings(content, HeadingLevel::H2), vec!["One", "Two"]);
        assert_eq!(extract_headings(content, HeadingLevel::H3), vec!["Nested"]);
        assert_eq!(extract_headings(content, HeadingLevel::H1), vec!["Title"]);
    }

    #[test]
    fn test_extract_headings_strips_formatting() {
        let content = "## The **MERGE** statement";
        assert_eq!(
            extract_headings(content, HeadingLevel::H2),
            vec!["The MERGE statement"]
        );
    }

    #[test]
    fn test_extract_headings_ignores_code_blocks() {
        let content = "```bash\n## not a heading\n```\n\n## Real";
        assert_eq!(extract_headings(content, HeadingLevel::H2), vec!["Real"]);
    }

    #[test]
    fn test_extract_headings_none() {
        assert!(extract_headings("plain text", HeadingLevel::H2).is_empty());
    }

    // ------------------------------------------------------------------------
    // truncate_text tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_truncate_without_whitespace() {
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
    }
}
