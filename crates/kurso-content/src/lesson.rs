//! Lesson field extraction.
//!
//! A lesson is a markdown file with a loose set of conventions:
//!
//! ```markdown
//! # Window Functions in Snowflake
//!
//! **Complexity Level:** [I]
//!
//! Window functions compute values across related rows...
//!
//! ## ROW_NUMBER and RANK
//! ```
//!
//! [`extract_fields`] reads the title, complexity tag, and reading time from
//! raw text. [`LessonRecord::parse`] adds everything derived from the file
//! name (slug, module, date) and the lesson's structure (description,
//! topics). Nothing here fails: missing markers fall back to defaults.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use kurso_core::id_from_path;
use pulldown_cmark::HeadingLevel;
use regex::Regex;
use serde::Serialize;

use crate::catalog::ModuleId;
use crate::classify::ModuleClassifier;
use crate::markdown::{extract_first_paragraph, extract_headings, normalize_line_endings};

/// Title used when a lesson has no `# ` heading.
pub const UNTITLED: &str = "Untitled Lesson";

/// Reading speed used for time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Longest lesson description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Most `##` topics kept per lesson.
pub const MAX_LESSON_TOPICS: usize = 8;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("Invalid title regex"));

static COMPLEXITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*Complexity Level:\*\*\s*\[([FIA])\]").expect("Invalid complexity regex")
});

static DATE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--(\d{4}-\d{2}-\d{2})$").expect("Invalid date suffix regex"));

// ============================================================================
// Complexity
// ============================================================================

/// Lesson difficulty, tagged in markdown as `**Complexity Level:** [X]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Complexity {
    /// Foundational
    #[default]
    F,
    /// Intermediate
    I,
    /// Advanced
    A,
    /// Expert. Part of the model, but lesson tags only ever carry F, I or A.
    E,
}

impl Complexity {
    /// Map a single-letter tag (any case) to a level.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "F" => Some(Self::F),
            "I" => Some(Self::I),
            "A" => Some(Self::A),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    /// Human-readable name of the level.
    pub fn label(self) -> &'static str {
        match self {
            Self::F => "Foundational",
            Self::I => "Intermediate",
            Self::A => "Advanced",
            Self::E => "Expert",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Field extraction
// ============================================================================

/// Fields read from a lesson's text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFields {
    pub title: String,
    pub complexity: Complexity,
    pub estimated_minutes: u32,
    /// The input with line endings normalized to `\n`
    pub content: String,
}

/// Reading time in minutes for `words` words: `ceil(words / 200)`, never
/// less than one minute.
pub fn estimate_minutes(words: usize) -> u32 {
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Extract title, complexity, and reading time from raw lesson text.
///
/// # Example
///
/// ```rust
/// use kurso_content::lesson::{extract_fields, Complexity};
///
/// let fields = extract_fields("# Star Schema\r\n\r\n**Complexity Level:** [a]\r\n");
/// assert_eq!(fields.title, "Star Schema");
/// assert_eq!(fields.complexity, Complexity::A);
/// assert_eq!(fields.estimated_minutes, 1);
/// assert!(!fields.content.contains('\r'));
/// ```
pub fn extract_fields(raw: &str) -> LessonFields {
    let content = normalize_line_endings(raw);

    let title = TITLE_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let complexity = COMPLEXITY_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Complexity::from_tag(m.as_str()))
        .unwrap_or_default();

    let estimated_minutes = estimate_minutes(content.split_whitespace().count());

    LessonFields {
        title,
        complexity,
        estimated_minutes,
        content,
    }
}

/// Parse the `--YYYY-MM-DD` suffix of a lesson file stem.
fn date_from_stem(stem: &str) -> Option<NaiveDate> {
    DATE_SUFFIX_RE
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
}

/// `##` headings, first occurrence kept, at most [`MAX_LESSON_TOPICS`].
fn lesson_topics(content: &str) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for heading in extract_headings(content, HeadingLevel::H2) {
        if !topics.contains(&heading) {
            topics.push(heading);
        }
        if topics.len() == MAX_LESSON_TOPICS {
            break;
        }
    }
    topics
}

// ============================================================================
// LessonRecord
// ============================================================================

/// A parsed lesson, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    /// Normalized file stem, used to look the lesson up again
    pub slug: String,
    pub title: String,
    pub complexity: Complexity,
    /// Reading time in minutes
    pub estimated_time: u32,
    pub module_id: ModuleId,
    /// Display name of the module
    pub module: &'static str,
    pub filename: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub last_updated: Option<NaiveDate>,
    pub content: String,
}

impl LessonRecord {
    /// Build a record from a file name and its raw contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kurso_content::{LessonRecord, ModuleClassifier};
    ///
    /// let raw = "# Joins\n\n**Complexity Level:** [F]\n\nCombine rows from two tables.\n\n## Inner Join\n";
    /// let lesson = LessonRecord::parse(
    ///     "SQL-ELT-Concepts--joins--2024-10-30.md",
    ///     raw,
    ///     &ModuleClassifier::default(),
    /// );
    ///
    /// assert_eq!(lesson.slug, "sql-elt-concepts--joins--2024-10-30");
    /// assert_eq!(lesson.module_id.to_string(), "module-2");
    /// assert_eq!(lesson.topics, vec!["Inner Join"]);
    /// assert_eq!(lesson.description.as_deref(), Some("Combine rows from two tables."));
    /// ```
    pub fn parse(filename: &str, raw: &str, classifier: &ModuleClassifier) -> Self {
        let fields = extract_fields(raw);
        let path = Path::new(filename);
        let module_id = classifier.classify(filename);
        let last_updated = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(date_from_stem);

        Self {
            slug: id_from_path(path).unwrap_or_default(),
            title: fields.title,
            complexity: fields.complexity,
            estimated_time: fields.estimated_minutes,
            module_id,
            module: module_id.info().name,
            filename: filename.to_string(),
            description: extract_first_paragraph(&fields.content, DESCRIPTION_MAX_CHARS),
            topics: lesson_topics(&fields.content),
            last_updated,
            content: fields.content,
        }
    }
}
