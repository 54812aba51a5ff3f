//! Suggestion handler. The suggestion is returned to the caller verbatim;
//! applying it to the document is a separate mutation round-trip.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggest::{self, SuggestionRequest};

use super::resumes::current_resume;

#[derive(Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
    /// For skills suggestions only: the comma-split entries not already on
    /// the document, ready to feed back through the mutation engine.
    #[serde(skip_serializing_if = "Option::is_none", rename = "newSkills")]
    pub new_skills: Option<Vec<String>>,
}

/// POST /api/v1/resumes/:id/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let resume = current_resume(&state, id).await?;
    let suggestion = suggest::suggest(&state.llm, &resume, &req).await?;

    let new_skills = match &req {
        SuggestionRequest::Skills { .. } => Some(suggest::merge_suggested_skills(
            &resume.skills,
            &suggestion,
        )),
        _ => None,
    };

    Ok(Json(SuggestionResponse {
        suggestion,
        new_skills,
    }))
}
