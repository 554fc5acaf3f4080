//! Markdown parsing utilities.
//!
//! - [`parser`]: Structure parsing with `pulldown-cmark` (paragraphs, headings)
//! - [`helpers`]: Line-oriented section and list extraction
//!
//! These return plain strings; the lesson and module description types in
//! this crate are assembled from them.

pub mod helpers;
pub mod parser;

// Re-export key functions
pub use helpers::{bold_lead, extract_section, list_item_text, normalize_line_endings, strip_bold};
pub use parser::{extract_first_paragraph, extract_headings};
