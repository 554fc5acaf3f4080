//! The fixed 20-module curriculum.
//!
//! Every lesson belongs to exactly one module, and every module is one of the
//! entries in [`CATALOG`]. [`ModuleId`] can only hold a number in `1..=20`,
//! so anything typed as a `ModuleId` is guaranteed to have a catalogue entry.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use kurso_core::Error;
use regex::Regex;
use serde::{Serialize, Serializer};

static FILE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(module-\d+)").expect("Invalid module prefix regex"));

/// Identifier of a curriculum module, rendered as `module-N`.
///
/// Ordering is numeric, so `module-2` sorts before `module-10`.
///
/// # Example
///
/// ```rust
/// use kurso_content::ModuleId;
///
/// let id: ModuleId = "module-12".parse().unwrap();
/// assert_eq!(id.number(), 12);
/// assert_eq!(id.to_string(), "module-12");
/// assert!("module-21".parse::<ModuleId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u8);

impl ModuleId {
    /// Number of modules in the curriculum.
    pub const COUNT: u8 = 20;

    /// The first module.
    pub const FIRST: ModuleId = ModuleId(1);

    /// Create an id from its module number, if it is in range.
    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&number).then_some(Self(number))
    }

    /// The module number (1-based).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Iterate over every module id in curriculum order.
    pub fn all() -> impl Iterator<Item = ModuleId> {
        (1..=Self::COUNT).map(ModuleId)
    }

    /// The catalogue entry for this module.
    pub fn info(self) -> &'static ModuleInfo {
        &CATALOG[usize::from(self.0) - 1]
    }

    /// Parse the `module-N` prefix of a description document's file name.
    ///
    /// ```rust
    /// use kurso_content::ModuleId;
    ///
    /// let id = ModuleId::from_file_prefix("module-10-unix-linux--2024-10-30.md");
    /// assert_eq!(id.map(|id| id.number()), Some(10));
    /// assert_eq!(ModuleId::from_file_prefix("README.md"), None);
    /// ```
    pub fn from_file_prefix(file_name: &str) -> Option<Self> {
        FILE_PREFIX_RE
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module-{}", self.0)
    }
}

impl FromStr for ModuleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidModuleId(s.to_string());

        let digits = s.strip_prefix("module-").ok_or_else(invalid)?;
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        digits
            .parse::<u8>()
            .ok()
            .and_then(ModuleId::new)
            .ok_or_else(invalid)
    }
}

impl Serialize for ModuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Static catalogue entry for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: ModuleId,
    /// Display name
    pub name: &'static str,
    /// One-line summary shown in the module list
    pub summary: &'static str,
    /// Icon name for client-side mapping
    pub icon: &'static str,
    /// Lowercase keyword that identifies the module in lesson file names
    pub keyword: &'static str,
}

macro_rules! module {
    ($n:literal, $name:literal, $icon:literal, $keyword:literal, $summary:literal) => {
        ModuleInfo {
            id: ModuleId($n),
            name: $name,
            summary: $summary,
            icon: $icon,
            keyword: $keyword,
        }
    };
}

/// The curriculum, indexed by module number minus one.
pub static CATALOG: [ModuleInfo; ModuleId::COUNT as usize] = [
    module!(1, "Data & Database Fundamentals", "Database", "data-database-fundamentals",
        "Master the foundational concepts of relational databases, data types, schema design, and ACID properties essential for data engineering."),
    module!(2, "SQL & ELT Concepts", "Code", "sql-elt-concepts",
        "Dive deep into SQL fundamentals, advanced queries, window functions, and understand the ELT paradigm for modern data processing."),
    module!(3, "Data Warehousing Principles", "Cloud", "data-warehousing-principles",
        "Learn data warehouse architecture, loading patterns, and data quality principles for enterprise-scale analytics."),
    module!(4, "Data Modeling", "Workflow", "data-modeling",
        "Master dimensional modeling, star schemas, slowly changing dimensions, and entity relationship diagrams."),
    module!(5, "Snowflake-Specific Knowledge", "Cloud", "snowflake-specific-knowledge",
        "Deep dive into Snowflake architecture, virtual warehouses, data loading, and platform-specific optimizations."),
    module!(6, "ETL/ELT Design & Best Practices", "Cog", "etlelt-design-best-practices",
        "Pipeline design principles, transformation patterns, and incremental loading strategies."),
    module!(7, "Data Governance, Quality & Metadata", "Shield", "data-governance-quality-metadata",
        "Data governance principles, quality implementation, and testing strategies for data pipelines."),
    module!(8, "Snowflake Security & Access Control", "Shield", "snowflake-security-access-control",
        "Authentication, authorization, RBAC, and security best practices in Snowflake."),
    module!(9, "Reporting & BI Concepts", "BarChart3", "reporting-bi-concepts",
        "BI tools, ThoughtSpot, visualization design, and semantic layers for analytics."),
    module!(10, "Unix/Linux & File Handling", "Terminal", "unixlinux-file-handling",
        "Unix fundamentals, shell scripting, file processing, and log analysis techniques."),
    module!(11, "Version Control & Team Collaboration", "GitBranch", "version-control-team-collaboration",
        "Git fundamentals, branching strategies, and collaboration workflows for data engineering teams."),
    module!(12, "Performance Optimization & Troubleshooting", "Gauge", "performance-optimization-troubleshooting",
        "Query performance analysis, optimization techniques, and cost management strategies."),
    module!(13, "CI/CD & Deployment Practices", "Settings", "cicd-deployment-practices",
        "Environment management, deployment automation, and testing in CI/CD pipelines."),
    module!(14, "Monitoring & Observability", "Eye", "monitoring-observability",
        "Pipeline monitoring, data quality tracking, and alerting systems for observability."),
    module!(15, "Orchestration & Scheduling Tools", "Workflow", "orchestration-scheduling-tools",
        "Workflow orchestration, DAG design, and scheduling best practices with modern tools."),
    module!(16, "Data Transformation with dbt", "Wrench", "data-transformation-with-dbt",
        "dbt core concepts, testing, documentation, and advanced features for data transformation."),
    module!(17, "Soft Skills & Professional Practices", "Users", "soft-skills-professional-practices",
        "Communication, documentation, collaboration, and professional development skills."),
    module!(18, "Business & Domain Knowledge", "Briefcase", "business-domain-knowledge",
        "Business metrics, requirements gathering, and industry knowledge for data engineers."),
    module!(19, "Additional Technical Skills", "Code", "additional-technical-skills",
        "JSON handling, APIs, data formats, and Python for data engineering workflows."),
    module!(20, "Emerging Topics & Advanced Concepts", "Sparkles", "emerging-topics-advanced-concepts",
        "Data mesh, DataOps, real-time streaming, and modern data architecture patterns."),
];
