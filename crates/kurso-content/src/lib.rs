//! Lesson and module-description content for Kurso.
//!
//! This crate turns the two content directories into typed records:
//!
//! - [`markdown`]: Generic markdown helpers
//!   - [`markdown::parser`]: Paragraph and heading extraction (`pulldown-cmark`)
//!   - [`markdown::helpers`]: `## Section` scanning and list items
//! - [`catalog`]: The fixed 20-module curriculum and [`ModuleId`]
//! - [`classify`]: Keyword rules mapping lesson file names to modules
//! - [`lesson`]: Lesson field extraction and [`LessonRecord`]
//! - [`description`]: Module description documents
//! - [`slug`]: Resolving slug segments to lesson files
//! - [`aggregate`]: Loading whole directories and building module views
//!
//! Parsing is best effort throughout: a lesson or description with missing
//! markers still produces a record, with defaults in place of the absent
//! fields. Only filesystem failures are reported as errors.
//!
//! # Example
//!
//! ```rust
//! use kurso_content::{LessonRecord, ModuleClassifier, Complexity};
//!
//! let lesson = LessonRecord::parse(
//!     "Snowflake-Specific-Knowledge--virtual-warehouses--2024-10-30.md",
//!     "# Virtual Warehouses\n\n**Complexity Level:** [I]\n",
//!     &ModuleClassifier::default(),
//! );
//! assert_eq!(lesson.title, "Virtual Warehouses");
//! assert_eq!(lesson.complexity, Complexity::I);
//! assert_eq!(lesson.module, "Snowflake-Specific Knowledge");
//! ```

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod description;
pub mod lesson;
pub mod markdown;
pub mod slug;

// Re-export commonly used types
pub use aggregate::{
    DescriptionMap, DescriptionStore, LessonLibrary, ModuleDetail, ModuleSummary,
    descriptions_dir_spec, lessons_dir_spec, module_detail, module_summaries,
};
pub use catalog::{CATALOG, ModuleId, ModuleInfo};
pub use classify::{KeywordRule, ModuleClassifier};
pub use description::{DescriptionMetadata, ModuleDescription, TopicCategories};
pub use lesson::{Complexity, LessonFields, LessonRecord, extract_fields};

// Re-export HeadingLevel for convenience
pub use pulldown_cmark::HeadingLevel;
