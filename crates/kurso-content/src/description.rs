//! Module description documents.
//!
//! Each module has one markdown document in the descriptions directory,
//! named `module-{N}-*.md`, with a fixed layout:
//!
//! ```markdown
//! # Module 4: Data Modeling
//!
//! Design schemas that make analytics simple.
//!
//! **Duration:** 12 hours
//! **Lessons:** 30 lessons
//! **Labs:** 3 labs
//!
//! ## Prerequisites
//! - **Module 1: Data & Database Fundamentals** - tables and keys
//!
//! ## Learning Objectives
//! - Design star and snowflake schemas
//!
//! ## Topics Covered
//! ### Dimensional Modeling
//! - **Star Schema** - facts surrounded by dimensions
//!
//! ## Skills Assessment
//! - ✅ Model a sales process end to end
//!
//! ## Next Steps
//! - Continue with **Module 5**
//! ```
//!
//! [`ModuleDescription::parse`] never fails: absent sections and metadata
//! become empty collections and zeros.

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use kurso_core::{Error, Result, read_text_lossy};
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::catalog::ModuleId;
use crate::markdown::{
    bold_lead, extract_section, list_item_text, normalize_line_endings, strip_bold,
};

/// Prerequisite entry used by foundational modules to say there are none.
const NO_PREREQUISITES: &str = "None - This is a foundational module";

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*Duration:\*\*\s*(\d+)\s*hours?").expect("Invalid duration regex")
});

static LESSONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*Lessons:\*\*\s*(\d+)\s*lessons?").expect("Invalid lessons regex")
});

static LABS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*Labs:\*\*\s*(\d+)\s*labs?").expect("Invalid labs regex"));

static ANY_LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+(.+)$").expect("Invalid list item regex")
});

// ============================================================================
// Types
// ============================================================================

/// Scalar metadata from the top of a description document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptionMetadata {
    pub title: String,
    pub description: String,
    /// Hours
    pub duration: u32,
    pub lessons: u32,
    pub labs: u32,
}

/// Topic lists grouped by `###` category, in document order.
///
/// Serializes as a JSON object whose keys keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCategories(Vec<(String, Vec<String>)>);

impl TopicCategories {
    /// Topics of one category.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, topics)| topics.as_slice())
    }

    /// Category names in document order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Every topic of every category, in document order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|(_, topics)| topics.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a category; a repeated name replaces the earlier topics in place.
    fn insert(&mut self, category: String, topics: Vec<String>) {
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = topics,
            None => self.0.push((category, topics)),
        }
    }
}

impl Serialize for TopicCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, topics) in &self.0 {
            map.serialize_entry(category, topics)?;
        }
        map.end()
    }
}

/// A parsed module description document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescription {
    pub id: ModuleId,
    pub metadata: DescriptionMetadata,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub topic_categories: TopicCategories,
    pub skills_assessment: Vec<String>,
    pub next_steps: Vec<String>,
}

// ============================================================================
// Parsing
// ============================================================================

impl ModuleDescription {
    /// Parse a description document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kurso_content::{ModuleDescription, ModuleId};
    ///
    /// let doc = "# Module 2\n\n## Prerequisites\n- **Module 1**: text\n";
    /// let parsed = ModuleDescription::parse(ModuleId::new(2).unwrap(), doc);
    /// assert_eq!(parsed.prerequisites, vec!["Module 1"]);
    /// assert!(parsed.learning_objectives.is_empty());
    /// ```
    pub fn parse(id: ModuleId, content: &str) -> Self {
        let content = normalize_line_endings(content);

        Self {
            id,
            metadata: parse_metadata(&content),
            prerequisites: parse_prerequisites(&content),
            learning_objectives: parse_objectives(&content),
            topic_categories: parse_topic_categories(&content),
            skills_assessment: parse_skills(&content),
            next_steps: parse_next_steps(&content),
        }
    }

    /// Read and parse a description document.
    ///
    /// A missing file yields `Ok(None)`; other read failures are errors.
    pub async fn load(id: ModuleId, path: &Path) -> Result<Option<Self>> {
        match read_text_lossy(path).await {
            Ok(text) => Ok(Some(Self::parse(id, &text))),
            Err(Error::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::warn!("Module description file not found: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// The first counter `re` captures; 0 when absent, `u32::MAX` when too large.
fn capture_number(re: &Regex, content: &str) -> u32 {
    let Some(digits) = re.captures(content).and_then(|caps| caps.get(1)) else {
        return 0;
    };
    digits.as_str().parse().unwrap_or_else(|e| {
        log::debug!("Counter {} out of range ({e}); saturating", digits.as_str());
        u32::MAX
    })
}

/// Title, first prose line, and the three counters.
///
/// The description is the first line after the title that is not blank, a
/// heading, a list item, a bold metadata line, or a rule. The search stops at
/// the first `## ` section.
fn parse_metadata(content: &str) -> DescriptionMetadata {
    let mut lines = content.lines();
    let title = lines
        .by_ref()
        .find_map(|line| line.strip_prefix("# "))
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let description = lines
        .take_while(|line| !line.starts_with("## "))
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with("- ")
                && !line.starts_with("* ")
                && !line.starts_with("**")
                && !line.starts_with("---")
        })
        .unwrap_or_default()
        .to_string();

    DescriptionMetadata {
        title,
        description,
        duration: capture_number(&DURATION_RE, content),
        lessons: capture_number(&LESSONS_RE, content),
        labs: capture_number(&LABS_RE, content),
    }
}

fn parse_prerequisites(content: &str) -> Vec<String> {
    extract_section(content, "Prerequisites")
        .unwrap_or_default()
        .into_iter()
        .filter_map(bold_lead)
        .filter(|name| *name != NO_PREREQUISITES)
        .map(str::to_string)
        .collect()
}

/// Plain bullets only; bold bullets are section preambles, not objectives.
fn parse_objectives(content: &str) -> Vec<String> {
    extract_section(content, "Learning Objectives")
        .unwrap_or_default()
        .into_iter()
        .filter(|line| !line.contains("**"))
        .filter_map(list_item_text)
        .map(str::to_string)
        .collect()
}

fn parse_topic_categories(content: &str) -> TopicCategories {
    let mut categories = TopicCategories::default();
    let mut current: Option<(String, Vec<String>)> = None;

    let mut flush = |current: &mut Option<(String, Vec<String>)>| {
        if let Some((name, topics)) = current.take()
            && !topics.is_empty()
        {
            categories.insert(name, topics);
        }
    };

    for line in extract_section(content, "Topics Covered").unwrap_or_default() {
        if let Some(name) = line.trim().strip_prefix("### ") {
            flush(&mut current);
            current = Some((name.trim().to_string(), Vec::new()));
        } else if let (Some((_, topics)), Some(topic)) = (current.as_mut(), bold_lead(line)) {
            topics.push(topic.to_string());
        }
    }
    flush(&mut current);

    categories
}

fn parse_skills(content: &str) -> Vec<String> {
    extract_section(content, "Skills Assessment")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|line| line.trim().strip_prefix("- ✅"))
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

fn parse_next_steps(content: &str) -> Vec<String> {
    extract_section(content, "Next Steps")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|line| ANY_LIST_ITEM_RE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| strip_bold(m.as_str()).trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}
