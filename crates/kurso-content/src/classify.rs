//! Filename-based module classification.
//!
//! Lesson files are named after the module they belong to, e.g.
//! `SQL-ELT-Concepts--window-functions--2024-10-30.md`. The classifier holds
//! an ordered list of [`KeywordRule`]s and assigns the first module whose
//! keyword appears in the lowercased file name.
//!
//! Lessons whose file name carries no known keyword land in
//! [`ModuleClassifier::DEFAULT_MODULE`]. Misnamed files are therefore
//! silently filed under module 1; the fallback is logged at debug level.

use crate::catalog::{CATALOG, ModuleId};

/// Assign lessons whose file name contains `keyword` to `module`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase substring to look for
    pub keyword: String,
    pub module: ModuleId,
}

impl KeywordRule {
    /// Create a rule; the keyword is lowercased.
    pub fn new(keyword: impl Into<String>, module: ModuleId) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            module,
        }
    }
}

/// Maps lesson file names to modules.
///
/// # Example
///
/// ```rust
/// use kurso_content::{ModuleClassifier, ModuleId};
///
/// let classifier = ModuleClassifier::default();
/// let id = classifier.classify("SQL-ELT-Concepts--joins--2024-10-30.md");
/// assert_eq!(id, ModuleId::new(2).unwrap());
///
/// assert_eq!(classifier.classify("misc-notes.md"), ModuleClassifier::DEFAULT_MODULE);
/// ```
#[derive(Debug, Clone)]
pub struct ModuleClassifier {
    rules: Vec<KeywordRule>,
}

impl ModuleClassifier {
    /// Module assigned when no rule matches.
    pub const DEFAULT_MODULE: ModuleId = ModuleId::FIRST;

    /// Create a classifier from rules, checked in order.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify a lesson by file name.
    pub fn classify(&self, filename: &str) -> ModuleId {
        let lower = filename.to_lowercase();
        match self.rules.iter().find(|rule| lower.contains(&rule.keyword)) {
            Some(rule) => rule.module,
            None => {
                log::debug!(
                    "No module keyword in {filename}; using {}",
                    Self::DEFAULT_MODULE
                );
                Self::DEFAULT_MODULE
            }
        }
    }
}

impl Default for ModuleClassifier {
    /// One rule per catalogue entry, in module order.
    fn default() -> Self {
        Self::new(
            CATALOG
                .iter()
                .map(|info| KeywordRule::new(info.keyword, info.id))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(n: u8) -> ModuleId {
        ModuleId::new(n).unwrap()
    }

    #[test]
    fn test_classify_known_keyword() {
        let classifier = ModuleClassifier::default();
        assert_eq!(
            classifier.classify("SQL-ELT-Concepts--window-functions--2024-10-30.md"),
            module(2)
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let classifier = ModuleClassifier::default();
        assert_eq!(classifier.classify("sql-elt-concepts-intro.md"), module(2));
        assert_eq!(classifier.classify("XX-SQL-ELT-CONCEPTS.MD"), module(2));
    }

    #[test]
    fn test_classify_default_module() {
        let classifier = ModuleClassifier::default();
        assert_eq!(classifier.classify("random-notes.md"), module(1));
        assert_eq!(classifier.classify(""), ModuleClassifier::DEFAULT_MODULE);
    }

    #[test]
    fn test_classify_every_catalogue_keyword() {
        let classifier = ModuleClassifier::default();
        for info in &CATALOG {
            let filename = format!("{}--topic--2024-10-30.md", info.keyword.to_uppercase());
            assert_eq!(classifier.classify(&filename), info.id, "{filename}");
        }
    }

    #[test]
    fn test_classify_first_rule_wins() {
        let classifier = ModuleClassifier::new(vec![
            KeywordRule::new("Snowflake", module(5)),
            KeywordRule::new("security", module(8)),
        ]);
        assert_eq!(classifier.classify("snowflake-security.md"), module(5));
        assert_eq!(classifier.classify("network-security.md"), module(8));
    }

    #[test]
    fn test_rule_keyword_is_lowercased() {
        let rule = KeywordRule::new("Data-Modeling", module(4));
        assert_eq!(rule.keyword, "data-modeling");
    }

    #[test]
    fn test_default_rules_follow_catalogue() {
        let classifier = ModuleClassifier::default();
        assert_eq!(classifier.rules().len(), usize::from(ModuleId::COUNT));
        assert_eq!(classifier.rules()[15].keyword, "data-transformation-with-dbt");
    }
}
