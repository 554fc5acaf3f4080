//! `/api/modules` handlers.

use axum::Json;
use axum::extract::{Path, State};
use kurso_content::{LessonRecord, ModuleDetail, ModuleId, ModuleSummary, module_detail, module_summaries};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Lessons returned alongside a module detail.
pub const MODULE_LESSON_PREVIEW: usize = 50;

#[derive(Debug, Serialize)]
pub struct ModuleListResponse {
    pub success: bool,
    pub count: usize,
    pub modules: Vec<ModuleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ModuleDetailResponse {
    pub success: bool,
    pub module: ModuleDetail,
    pub lessons: Vec<LessonRecord>,
}

/// `GET /api/modules`
///
/// A missing descriptions directory only drops prerequisites; a missing
/// lessons directory fails the request.
pub async fn list_modules(State(state): State<AppState>) -> ApiResult<Json<ModuleListResponse>> {
    let lessons = state.lessons.load_all().await?;
    let descriptions = state.descriptions.all_or_empty().await?;

    let modules = module_summaries(&lessons, &descriptions);
    Ok(Json(ModuleListResponse {
        success: true,
        count: modules.len(),
        modules,
    }))
}

/// `GET /api/modules/{module_id}`
pub async fn get_module(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> ApiResult<Json<ModuleDetailResponse>> {
    let id: ModuleId = module_id
        .parse()
        .map_err(|_| ApiError::not_found(format!("Module not found: {module_id}")))?;

    let mut lessons = state.lessons.by_module(id).await?;
    let descriptions = state.descriptions.all_or_empty().await?;

    let module = module_detail(id, &lessons, &descriptions);
    lessons.truncate(MODULE_LESSON_PREVIEW);
    Ok(Json(ModuleDetailResponse {
        success: true,
        module,
        lessons,
    }))
}
