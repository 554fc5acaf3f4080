//! Aggregation over the lessons and descriptions directories.
//!
//! - [`LessonLibrary`] parses every lesson file, concurrently, on each call.
//! - [`DescriptionStore`] parses every module description document and keeps
//!   the resulting map in an injected [`TtlCache`].
//! - [`module_summary`] and [`module_detail`] combine both into the module
//!   views served by the API.
//!
//! Both sources resolve their directory on every load, so a directory that
//! appears after startup is picked up without a restart.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use futures::future::try_join_all;
use kurso_core::{
    DirSpec, PathResolver, Result, TtlCache, list_markdown_files, read_text_lossy,
};
use serde::Serialize;

use crate::catalog::{ModuleId, ModuleInfo};
use crate::classify::ModuleClassifier;
use crate::description::ModuleDescription;
use crate::lesson::LessonRecord;
use crate::slug::find_lesson_file;

/// Topics shown per module in the catalogue list.
pub const LIST_TOPIC_LIMIT: usize = 10;

/// Topics shown in a single module's detail view.
pub const DETAIL_TOPIC_LIMIT: usize = 15;

/// Lessons assumed per lab when estimating lab counts.
pub const LESSONS_PER_LAB: usize = 10;

/// Parsed descriptions keyed by module, in module order.
pub type DescriptionMap = BTreeMap<ModuleId, ModuleDescription>;

/// Candidate lesson directories, relative to the working directory.
pub const LESSON_DIR_CANDIDATES: &[&str] = &["../../lessons", "lessons", "../lessons"];

/// Candidate description directories, relative to the working directory.
pub const DESCRIPTION_DIR_CANDIDATES: &[&str] = &[
    "modules-descriptions",
    "../modules-descriptions",
    "../../modules-descriptions",
];

/// Directory spec for lessons, with an optional configured override.
pub fn lessons_dir_spec(explicit: Option<PathBuf>) -> DirSpec {
    DirSpec::new("Lessons", "LESSONS_DIR")
        .with_explicit(explicit)
        .with_candidates(LESSON_DIR_CANDIDATES)
}

/// Directory spec for module descriptions, with an optional configured
/// override.
pub fn descriptions_dir_spec(explicit: Option<PathBuf>) -> DirSpec {
    DirSpec::new("Module descriptions", "DESCRIPTIONS_DIR")
        .with_explicit(explicit)
        .with_candidates(DESCRIPTION_DIR_CANDIDATES)
}

// ============================================================================
// Lessons
// ============================================================================

/// Access to the lessons directory.
#[derive(Debug, Clone)]
pub struct LessonLibrary {
    resolver: PathResolver,
    spec: DirSpec,
    classifier: ModuleClassifier,
}

impl LessonLibrary {
    /// Create a library that resolves `spec` through `resolver`.
    pub fn new(resolver: PathResolver, spec: DirSpec) -> Self {
        Self {
            resolver,
            spec,
            classifier: ModuleClassifier::default(),
        }
    }

    /// Replace the default keyword classifier.
    pub fn with_classifier(mut self, classifier: ModuleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Resolve the lessons directory.
    pub fn dir(&self) -> Result<PathBuf> {
        self.resolver.resolve_dir(&self.spec)
    }

    /// Parse every lesson, in file name order.
    pub async fn load_all(&self) -> Result<Vec<LessonRecord>> {
        let dir = self.dir()?;
        load_lessons(&dir, &self.classifier).await
    }

    /// Parse every lesson and keep those assigned to `module`.
    pub async fn by_module(&self, module: ModuleId) -> Result<Vec<LessonRecord>> {
        let mut lessons = self.load_all().await?;
        lessons.retain(|lesson| lesson.module_id == module);
        Ok(lessons)
    }

    /// Resolve slug segments to a lesson and parse it.
    pub async fn find<S: AsRef<str>>(&self, segments: &[S]) -> Result<Option<LessonRecord>> {
        let dir = self.dir()?;
        let Some(path) = find_lesson_file(&dir, segments).await? else {
            return Ok(None);
        };
        parse_lesson_file(&path, &self.classifier).await.map(Some)
    }
}

/// Read and parse a single lesson file.
async fn parse_lesson_file(path: &Path, classifier: &ModuleClassifier) -> Result<LessonRecord> {
    let raw = read_text_lossy(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(LessonRecord::parse(&filename, &raw, classifier))
}

/// Parse every `.md` file in `dir` concurrently.
///
/// The first read failure aborts the whole load.
pub async fn load_lessons(
    dir: &Path,
    classifier: &ModuleClassifier,
) -> Result<Vec<LessonRecord>> {
    let started = Instant::now();
    let files = list_markdown_files(dir).await?;

    let lessons =
        try_join_all(files.iter().map(|path| parse_lesson_file(path, classifier))).await?;

    log::info!(
        "Parsed {} lessons from {} in {:?}",
        lessons.len(),
        dir.display(),
        started.elapsed()
    );
    Ok(lessons)
}

// ============================================================================
// Descriptions
// ============================================================================

/// Cached access to the module descriptions directory.
#[derive(Debug)]
pub struct DescriptionStore {
    resolver: PathResolver,
    spec: DirSpec,
    cache: TtlCache<DescriptionMap>,
}

impl DescriptionStore {
    /// Create a store that resolves `spec` through `resolver` and memoizes
    /// the parsed map in `cache`.
    pub fn new(resolver: PathResolver, spec: DirSpec, cache: TtlCache<DescriptionMap>) -> Self {
        Self {
            resolver,
            spec,
            cache,
        }
    }

    /// All descriptions, from the cache while it is fresh.
    ///
    /// Fails when the directory cannot be found or read; failures are not
    /// cached.
    pub async fn all(&self) -> Result<Arc<DescriptionMap>> {
        self.cache
            .get_or_load(|| async {
                let dir = self.resolver.resolve_dir(&self.spec)?;
                load_descriptions(&dir).await
            })
            .await
    }

    /// Like [`all`](Self::all), but a missing directory yields an empty map.
    pub async fn all_or_empty(&self) -> Result<Arc<DescriptionMap>> {
        match self.all().await {
            Err(e) if e.is_missing_content() => {
                log::warn!("{e}; continuing without module descriptions");
                Ok(Arc::new(DescriptionMap::new()))
            }
            other => other,
        }
    }

    /// The description of one module.
    pub async fn get(&self, module: ModuleId) -> Result<Option<ModuleDescription>> {
        Ok(self.all().await?.get(&module).cloned())
    }
}

/// Parse every `module-N-*.md` document in `dir`.
///
/// Files without a valid module prefix are skipped. When two documents
/// share a module, the later file name wins.
pub async fn load_descriptions(dir: &Path) -> Result<DescriptionMap> {
    let started = Instant::now();
    let files = list_markdown_files(dir).await?;

    let documents: Vec<(ModuleId, &PathBuf)> = files
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            match ModuleId::from_file_prefix(name) {
                Some(id) => Some((id, path)),
                None => {
                    log::debug!("Skipping {name}: no module-N prefix");
                    None
                }
            }
        })
        .collect();

    let parsed = try_join_all(
        documents
            .iter()
            .map(|(id, path)| ModuleDescription::load(*id, path)),
    )
    .await?;

    let mut map = DescriptionMap::new();
    for description in parsed.into_iter().flatten() {
        if let Some(previous) = map.insert(description.id, description) {
            log::warn!("Duplicate description for {}; keeping the later file", previous.id);
        }
    }

    log::info!(
        "Loaded {} module descriptions from {} in {:?}",
        map.len(),
        dir.display(),
        started.elapsed()
    );
    Ok(map)
}

// ============================================================================
// Module views
// ============================================================================

/// A module in the catalogue list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary {
    pub id: ModuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub estimated_hours: u32,
    pub lessons: usize,
    pub labs: u32,
    pub topics: Vec<String>,
    pub prerequisites: Vec<String>,
}

/// A single module with its learning objectives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDetail {
    #[serde(flatten)]
    pub summary: ModuleSummary,
    pub learning_objectives: Vec<String>,
}

/// Total reading time in whole hours, rounded up.
fn estimated_hours(lessons: &[&LessonRecord]) -> u32 {
    let minutes: u64 = lessons.iter().map(|l| u64::from(l.estimated_time)).sum();
    u32::try_from(minutes.div_ceil(60)).unwrap_or(u32::MAX)
}

/// Lesson topics in lesson order, first occurrence kept, at most `limit`.
fn collect_topics(lessons: &[&LessonRecord], limit: usize) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for topic in lessons.iter().flat_map(|l| l.topics.iter()) {
        if topics.len() == limit {
            break;
        }
        if !topics.contains(topic) {
            topics.push(topic.clone());
        }
    }
    topics
}

/// Summarize one module from its lessons and optional description.
///
/// Prerequisites come only from the description document.
pub fn module_summary(
    info: &'static ModuleInfo,
    lessons: &[&LessonRecord],
    description: Option<&ModuleDescription>,
    topic_limit: usize,
) -> ModuleSummary {
    let labs = lessons.len().div_ceil(LESSONS_PER_LAB);
    ModuleSummary {
        id: info.id,
        title: info.name,
        description: info.summary,
        icon: info.icon,
        estimated_hours: estimated_hours(lessons),
        lessons: lessons.len(),
        labs: u32::try_from(labs).unwrap_or(u32::MAX),
        topics: collect_topics(lessons, topic_limit),
        prerequisites: description
            .map(|d| d.prerequisites.clone())
            .unwrap_or_default(),
    }
}

/// Summaries of all 20 modules, in module order.
pub fn module_summaries(
    lessons: &[LessonRecord],
    descriptions: &DescriptionMap,
) -> Vec<ModuleSummary> {
    let mut grouped: BTreeMap<ModuleId, Vec<&LessonRecord>> = BTreeMap::new();
    for lesson in lessons {
        grouped.entry(lesson.module_id).or_default().push(lesson);
    }

    ModuleId::all()
        .map(|id| {
            let module_lessons = grouped.get(&id).map(Vec::as_slice).unwrap_or_default();
            module_summary(
                id.info(),
                module_lessons,
                descriptions.get(&id),
                LIST_TOPIC_LIMIT,
            )
        })
        .collect()
}

/// Detail view of one module. `lessons` may contain other modules' lessons;
/// they are ignored.
pub fn module_detail(
    module: ModuleId,
    lessons: &[LessonRecord],
    descriptions: &DescriptionMap,
) -> ModuleDetail {
    let own: Vec<&LessonRecord> = lessons.iter().filter(|l| l.module_id == module).collect();
    let description = descriptions.get(&module);

    ModuleDetail {
        summary: module_summary(module.info(), &own, description, DETAIL_TOPIC_LIMIT),
        learning_objectives: description
            .map(|d| d.learning_objectives.clone())
            .unwrap_or_default(),
    }
}
