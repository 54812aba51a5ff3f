pub mod health;
pub mod resumes;
pub mod suggest;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document CRUD
        .route(
            "/api/v1/resumes",
            post(resumes::handle_create).get(resumes::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get).delete(resumes::handle_delete),
        )
        .route("/api/v1/resumes/:id/save", post(resumes::handle_save))
        // Section mutations
        .route(
            "/api/v1/resumes/:id/sections/:section/items",
            post(resumes::handle_add_item),
        )
        .route(
            "/api/v1/resumes/:id/sections/:section/items/:item_id",
            patch(resumes::handle_update_item).delete(resumes::handle_delete_item),
        )
        .route(
            "/api/v1/resumes/:id/skills",
            put(resumes::handle_replace_skills).post(resumes::handle_add_skill),
        )
        .route(
            "/api/v1/resumes/:id/personal-info",
            patch(resumes::handle_update_personal_info),
        )
        .route(
            "/api/v1/resumes/:id/template",
            put(resumes::handle_set_template),
        )
        .route("/api/v1/resumes/:id/title", put(resumes::handle_set_title))
        // Preview & export
        .route("/api/v1/resumes/:id/preview", get(resumes::handle_preview))
        .route("/api/v1/resumes/:id/export", post(resumes::handle_export))
        .route("/api/v1/certificate", post(resumes::handle_certificate))
        // Suggestions
        .route("/api/v1/resumes/:id/suggest", post(suggest::handle_suggest))
        .with_state(state)
}
