//! `/api/module-descriptions` handlers.

use axum::Json;
use axum::extract::{Path, State};
use kurso_content::{DescriptionMap, ModuleDescription, ModuleId};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DescriptionListResponse {
    pub success: bool,
    pub count: usize,
    /// Keyed by module id, in module order
    pub descriptions: DescriptionMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionResponse {
    pub success: bool,
    pub module_id: ModuleId,
    pub description: ModuleDescription,
}

/// `GET /api/module-descriptions`
pub async fn list_descriptions(
    State(state): State<AppState>,
) -> ApiResult<Json<DescriptionListResponse>> {
    let descriptions = state.descriptions.all().await?;
    Ok(Json(DescriptionListResponse {
        success: true,
        count: descriptions.len(),
        descriptions: DescriptionMap::clone(&descriptions),
    }))
}

/// `GET /api/module-descriptions/{module_id}`
pub async fn get_description(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> ApiResult<Json<DescriptionResponse>> {
    let not_found = || ApiError::not_found(format!("Module description not found for {module_id}"));

    let id: ModuleId = module_id.parse().map_err(|_| not_found())?;
    let description = state.descriptions.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(DescriptionResponse {
        success: true,
        module_id: id,
        description,
    }))
}
