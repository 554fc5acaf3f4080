//! HTTP routes.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/health` | [`health::health`] |
//! | `GET /api/lessons` | [`lessons::list_lessons`] |
//! | `GET /api/lessons/module/{module_id}` | [`lessons::lessons_by_module`] |
//! | `GET /api/lessons/{*slug}` | [`lessons::get_lesson`] |
//! | `GET /api/modules` | [`modules::list_modules`] |
//! | `GET /api/modules/{module_id}` | [`modules::get_module`] |
//! | `GET /api/module-descriptions` | [`descriptions::list_descriptions`] |
//! | `GET /api/module-descriptions/{module_id}` | [`descriptions::get_description`] |

pub mod descriptions;
pub mod health;
pub mod lessons;
pub mod modules;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/lessons", get(lessons::list_lessons))
        .route(
            "/api/lessons/module/{module_id}",
            get(lessons::lessons_by_module),
        )
        .route("/api/lessons/{*slug}", get(lessons::get_lesson))
        .route("/api/modules", get(modules::list_modules))
        .route("/api/modules/{module_id}", get(modules::get_module))
        .route(
            "/api/module-descriptions",
            get(descriptions::list_descriptions),
        )
        .route(
            "/api/module-descriptions/{module_id}",
            get(descriptions::get_description),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
