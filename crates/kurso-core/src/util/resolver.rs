//! Configurable resolver for content directories.
//!
//! The service may be started from the repository root, from the API crate,
//! or from a nested build directory, so each content directory is looked up
//! through a prioritized list of locations:
//!
//! 1. An explicitly configured path
//! 2. `{PROJECT}_{SUFFIX}` environment variable (e.g. `KURSO_LESSONS_DIR`)
//! 3. Candidate paths relative to the base directory (the working directory
//!    unless overridden)
//!
//! The first location that exists wins. When none exist, the error carries
//! every path that was checked.
//!
//! # Example
//!
//! ```no_run
//! use kurso_core::util::resolver::{DirSpec, PathResolver};
//!
//! let resolver = PathResolver::new("kurso");
//! let lessons = DirSpec::new("Lessons", "LESSONS_DIR")
//!     .with_candidates(&["../../lessons", "lessons", "../lessons"]);
//!
//! match resolver.resolve_dir(&lessons) {
//!     Ok(dir) => println!("Lessons: {}", dir.display()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::env;
use std::path::PathBuf;

use crate::util::paths::{expand_path, expand_tilde};
use crate::{Error, Result};

/// Description of one content directory to resolve.
#[derive(Debug, Clone)]
pub struct DirSpec {
    /// Human-readable name used in logs and errors (e.g. "Lessons")
    kind: String,
    /// Environment variable suffix (e.g. "LESSONS_DIR")
    env_suffix: String,
    /// Explicitly configured location, checked first
    explicit: Option<PathBuf>,
    /// Paths relative to the base directory, in priority order
    candidates: Vec<PathBuf>,
}

impl DirSpec {
    /// Create a spec for a directory of the given kind.
    pub fn new(kind: &str, env_suffix: &str) -> Self {
        Self {
            kind: kind.to_string(),
            env_suffix: env_suffix.to_string(),
            explicit: None,
            candidates: vec![],
        }
    }

    /// Set an explicitly configured path (supports ~ expansion).
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path.map(|p| expand_path(&p));
        self
    }

    /// Set the relative candidate paths, highest priority first.
    pub fn with_candidates(mut self, candidates: &[&str]) -> Self {
        self.candidates = candidates.iter().map(PathBuf::from).collect();
        self
    }
}

/// Resolver for project content directories.
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Project name (e.g., "kurso")
    project_name: String,
    /// Environment variable prefix (e.g., "KURSO")
    env_prefix: String,
    /// Directory relative candidates are joined onto
    base_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "kurso" → "KURSO"
    /// - "course-site" → "COURSE_SITE"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            base_dir: None,
        }
    }

    /// Resolve relative candidates against `dir` instead of the working
    /// directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use kurso_core::util::resolver::PathResolver;
    ///
    /// let resolver = PathResolver::new("kurso");
    /// assert_eq!(resolver.env_var("LESSONS_DIR"), "KURSO_LESSONS_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// The directory relative candidates are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a content directory.
    ///
    /// Checks in order:
    /// 1. The spec's explicit path
    /// 2. `{PROJECT}_{SUFFIX}` environment variable
    /// 3. Each relative candidate under [`base_dir`](Self::base_dir)
    pub fn resolve_dir(&self, spec: &DirSpec) -> Result<PathBuf> {
        let from_env = env::var(self.env_var(&spec.env_suffix)).ok();
        self.resolve_with_env(spec, from_env)
    }

    fn resolve_with_env(&self, spec: &DirSpec, from_env: Option<String>) -> Result<PathBuf> {
        let mut tried = Vec::new();

        let base = self.base_dir();
        let ordered = spec
            .explicit
            .iter()
            .cloned()
            .chain(from_env.as_deref().map(expand_tilde))
            .chain(spec.candidates.iter().map(|c| base.join(c)));

        for path in ordered {
            if path.is_dir() {
                log::debug!("{} directory resolved to {}", spec.kind, path.display());
                return Ok(path);
            }
            tried.push(path);
        }

        log::error!(
            "{} directory not found; tried {} location(s)",
            spec.kind,
            tried.len()
        );
        Err(Error::directory_missing(spec.kind.clone(), tried))
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lessons_spec() -> DirSpec {
        DirSpec::new("Lessons", "LESSONS_DIR").with_candidates(&[
            "../../lessons",
            "lessons",
            "../lessons",
        ])
    }

    #[test]
    fn test_new_simple_name() {
        let resolver = PathResolver::new("kurso");
        assert_eq!(resolver.project_name(), "kurso");
        assert_eq!(resolver.env_prefix(), "KURSO");
    }

    #[test]
    fn test_new_kebab_case_name() {
        let resolver = PathResolver::new("course-site");
        assert_eq!(resolver.env_prefix(), "COURSE_SITE");
    }

    #[test]
    fn test_env_var() {
        let resolver = PathResolver::new("kurso");
        assert_eq!(resolver.env_var("LESSONS_DIR"), "KURSO_LESSONS_DIR");
        assert_eq!(
            resolver.env_var("DESCRIPTIONS_DIR"),
            "KURSO_DESCRIPTIONS_DIR"
        );
    }

    #[test]
    fn test_resolve_candidate_in_priority_order() {
        let root = TempDir::new().unwrap();
        let api_dir = root.path().join("app").join("api");
        std::fs::create_dir_all(&api_dir).unwrap();
        std::fs::create_dir_all(root.path().join("lessons")).unwrap();
        std::fs::create_dir_all(api_dir.join("lessons")).unwrap();

        let resolver = PathResolver::new("kurso").with_base_dir(&api_dir);
        let resolved = resolver.resolve_with_env(&lessons_spec(), None).unwrap();

        // ../../lessons outranks ./lessons
        assert_eq!(resolved, api_dir.join("../../lessons"));
    }

    #[test]
    fn test_resolve_falls_through_to_later_candidate() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("lessons")).unwrap();

        let resolver = PathResolver::new("kurso").with_base_dir(root.path());
        let resolved = resolver.resolve_with_env(&lessons_spec(), None).unwrap();
        assert_eq!(resolved, root.path().join("lessons"));
    }

    #[test]
    fn test_resolve_explicit_wins() {
        let root = TempDir::new().unwrap();
        let custom = root.path().join("content");
        std::fs::create_dir_all(&custom).unwrap();
        std::fs::create_dir_all(root.path().join("lessons")).unwrap();

        let spec = lessons_spec().with_explicit(Some(custom.clone()));
        let resolver = PathResolver::new("kurso").with_base_dir(root.path());
        assert_eq!(resolver.resolve_with_env(&spec, None).unwrap(), custom);
    }

    #[test]
    fn test_resolve_env_before_candidates() {
        let root = TempDir::new().unwrap();
        let from_env = root.path().join("env-lessons");
        std::fs::create_dir_all(&from_env).unwrap();
        std::fs::create_dir_all(root.path().join("lessons")).unwrap();

        let resolver = PathResolver::new("kurso").with_base_dir(root.path());
        let resolved = resolver
            .resolve_with_env(
                &lessons_spec(),
                Some(from_env.to_string_lossy().into_owned()),
            )
            .unwrap();
        assert_eq!(resolved, from_env);
    }

    #[test]
    fn test_resolve_missing_reports_every_path() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        let spec = lessons_spec().with_explicit(Some(missing.clone()));

        let resolver = PathResolver::new("kurso").with_base_dir(root.path());
        let err = resolver.resolve_with_env(&spec, None).unwrap_err();

        match err {
            Error::DirectoryMissing { kind, tried } => {
                assert_eq!(kind, "Lessons");
                assert_eq!(tried.len(), 4);
                assert_eq!(tried[0], missing);
                assert_eq!(tried[2], root.path().join("lessons"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_ignores_plain_files() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("lessons"), "not a dir").unwrap();

        let resolver = PathResolver::new("kurso").with_base_dir(root.path());
        assert!(resolver.resolve_with_env(&lessons_spec(), None).is_err());
    }
}
