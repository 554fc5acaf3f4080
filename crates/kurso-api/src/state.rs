//! Shared handler state.

use std::sync::Arc;

use kurso_content::{
    DescriptionStore, LessonLibrary, descriptions_dir_spec, lessons_dir_spec,
};
use kurso_core::{PathResolver, TtlCache};

use crate::config::{KursoConfig, PROJECT_NAME};

/// State cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub lessons: LessonLibrary,
    pub descriptions: Arc<DescriptionStore>,
}

impl AppState {
    pub fn new(lessons: LessonLibrary, descriptions: DescriptionStore) -> Self {
        Self {
            lessons,
            descriptions: Arc::new(descriptions),
        }
    }

    /// Build state from configuration, resolving directories relative to
    /// the working directory.
    pub fn from_config(config: &KursoConfig) -> Self {
        Self::with_resolver(config, PathResolver::new(PROJECT_NAME))
    }

    /// Build state from configuration with a caller-supplied resolver.
    pub fn with_resolver(config: &KursoConfig, resolver: PathResolver) -> Self {
        let content = &config.content;
        let lessons = LessonLibrary::new(resolver.clone(), lessons_dir_spec(content.lessons_dir()));
        let descriptions = DescriptionStore::new(
            resolver,
            descriptions_dir_spec(content.descriptions_dir()),
            TtlCache::new(content.cache_ttl()),
        );
        Self::new(lessons, descriptions)
    }
}
