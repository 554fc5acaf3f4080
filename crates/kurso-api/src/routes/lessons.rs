//! `/api/lessons` handlers.

use axum::Json;
use axum::extract::{Path, State};
use kurso_content::slug::split_slug_path;
use kurso_content::{LessonRecord, ModuleId};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LessonListResponse {
    pub success: bool,
    pub count: usize,
    pub lessons: Vec<LessonRecord>,
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub success: bool,
    pub lesson: LessonRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleLessonsResponse {
    pub success: bool,
    pub module_id: String,
    pub count: usize,
    pub lessons: Vec<LessonRecord>,
}

/// `GET /api/lessons`
pub async fn list_lessons(State(state): State<AppState>) -> ApiResult<Json<LessonListResponse>> {
    let lessons = state.lessons.load_all().await?;
    Ok(Json(LessonListResponse {
        success: true,
        count: lessons.len(),
        lessons,
    }))
}

/// `GET /api/lessons/{*slug}`
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<LessonResponse>> {
    let segments = split_slug_path(&slug);
    if segments.is_empty() {
        return Err(ApiError::bad_request("Slug is required"));
    }

    match state.lessons.find(segments.as_slice()).await? {
        Some(lesson) => Ok(Json(LessonResponse {
            success: true,
            lesson,
        })),
        None => Err(ApiError::not_found(format!("Lesson not found: {}", segments.join("/")))),
    }
}

/// `GET /api/lessons/module/{module_id}`
///
/// An id outside the catalogue matches no lessons rather than failing.
pub async fn lessons_by_module(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> ApiResult<Json<ModuleLessonsResponse>> {
    let lessons = match module_id.parse::<ModuleId>() {
        Ok(id) => state.lessons.by_module(id).await?,
        Err(e) => {
            tracing::debug!(error = %e, "unknown module in lesson filter");
            Vec::new()
        }
    };

    Ok(Json(ModuleLessonsResponse {
        success: true,
        module_id,
        count: lessons.len(),
        lessons,
    }))
}
