//! Resume handlers: CRUD, draft mutations, preview and export.
//!
//! Mutation handlers all follow the same shape: read the latest draft
//! snapshot (seeding it from the store on first touch), apply one engine
//! operation, publish the new snapshot atomically, return it. Nothing is
//! persisted until an explicit save.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_certificate_pdf, export_resume_pdf, ExportedDocument};
use crate::models::resume::{
    PersonalField, Resume, ResumeRecord, ResumeSummary, SectionKind, TemplateId,
};
use crate::mutation;
use crate::render;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct OwnerQuery {
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    #[serde(default)]
    pub title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Draft session plumbing
// ────────────────────────────────────────────────────────────────────────────

/// Latest snapshot for a document: the draft if one exists, the stored
/// snapshot otherwise.
pub(super) async fn current_resume(state: &AppState, id: Uuid) -> Result<Resume, AppError> {
    if let Some(draft) = state.drafts.get(&id) {
        return Ok(draft.clone());
    }
    Ok(state.store.load(id).await?.resume)
}

/// Applies one engine operation against the latest snapshot and publishes
/// the result. The whole-snapshot replace happens under the map entry lock,
/// so concurrent mutations of one document serialize; last write wins.
async fn apply_mutation<F, T>(state: &AppState, id: Uuid, op: F) -> Result<T, AppError>
where
    F: FnOnce(&Resume) -> (Resume, T),
{
    if !state.drafts.contains_key(&id) {
        let snapshot = state.store.load(id).await?.resume;
        state.drafts.entry(id).or_insert(snapshot);
    }
    let mut entry = state
        .drafts
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("resume {id}")))?;
    let (next, out) = op(entry.value());
    *entry = next;
    Ok(out)
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let record = state
        .store
        .create(req.owner_id, Resume::new(&req.title))
        .await?;
    state.drafts.insert(record.id, record.resume.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    Ok(Json(state.store.list(params.owner_id).await?))
}

/// GET /api/v1/resumes/:id — the latest snapshot, draft included.
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(current_resume(&state, id).await?))
}

/// POST /api/v1/resumes/:id/save — the explicit snapshot write.
pub async fn handle_save(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let snapshot = current_resume(&state, id).await?;
    Ok(Json(state.store.save(id, snapshot).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.remove(id).await?;
    state.drafts.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Section mutations
// ────────────────────────────────────────────────────────────────────────────

fn parse_section(raw: &str) -> Result<SectionKind, AppError> {
    SectionKind::parse(raw)
        .ok_or_else(|| AppError::Validation(format!("unknown section '{raw}'")))
}

#[derive(Serialize)]
pub struct AddItemResponse {
    pub id: String,
    pub resume: Resume,
}

/// POST /api/v1/resumes/:id/sections/:section/items
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
    Json(body): Json<Value>,
) -> Result<Json<AddItemResponse>, AppError> {
    let kind = parse_section(&section)?;
    let item = mutation::NewItem::from_json(kind, body)
        .map_err(|e| AppError::Validation(format!("malformed {section} item: {e}")))?;
    let (item_id, resume) = apply_mutation(&state, id, |resume| {
        let (next, item_id) = mutation::add_item(resume, item);
        (next.clone(), (item_id, next))
    })
    .await?;
    Ok(Json(AddItemResponse { id: item_id, resume }))
}

/// PATCH /api/v1/resumes/:id/sections/:section/items/:item_id
///
/// An unknown item id is a silent no-op by contract: the response is the
/// unchanged snapshot, not an error.
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((id, section, item_id)): Path<(Uuid, String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Resume>, AppError> {
    let kind = parse_section(&section)?;
    let patch = mutation::ItemPatch::from_json(kind, body)
        .map_err(|e| AppError::Validation(format!("malformed {section} patch: {e}")))?;
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::update_item(resume, &item_id, patch);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id/sections/:section/items/:item_id
pub async fn handle_delete_item(
    State(state): State<AppState>,
    Path((id, section, item_id)): Path<(Uuid, String, String)>,
) -> Result<Json<Resume>, AppError> {
    let kind = parse_section(&section)?;
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::delete_item(resume, kind, &item_id);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

#[derive(Deserialize)]
pub struct ReplaceSkillsRequest {
    pub skills: Vec<String>,
}

/// PUT /api/v1/resumes/:id/skills
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplaceSkillsRequest>,
) -> Result<Json<Resume>, AppError> {
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::replace_skills(resume, req.skills);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

#[derive(Deserialize)]
pub struct AddSkillRequest {
    pub skill: String,
}

/// POST /api/v1/resumes/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<Resume>, AppError> {
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::add_skill(resume, &req.skill);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

#[derive(Deserialize)]
pub struct PersonalFieldRequest {
    pub field: PersonalField,
    #[serde(default)]
    pub value: String,
}

/// PATCH /api/v1/resumes/:id/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PersonalFieldRequest>,
) -> Result<Json<Resume>, AppError> {
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::update_personal_info(resume, req.field, &req.value);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

#[derive(Deserialize)]
pub struct SetTemplateRequest {
    pub template: String,
}

/// PUT /api/v1/resumes/:id/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTemplateRequest>,
) -> Result<Json<Resume>, AppError> {
    let template = TemplateId::resolve(&req.template);
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::set_template(resume, template);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

#[derive(Deserialize)]
pub struct SetTitleRequest {
    #[serde(default)]
    pub title: String,
}

/// PUT /api/v1/resumes/:id/title
pub async fn handle_set_title(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetTitleRequest>,
) -> Result<Json<Resume>, AppError> {
    let resume = apply_mutation(&state, id, |resume| {
        let next = mutation::set_title(resume, &req.title);
        (next.clone(), next)
    })
    .await?;
    Ok(Json(resume))
}

// ────────────────────────────────────────────────────────────────────────────
// Preview & export
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/:id/preview — the laid-out surface as JSON.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let resume = current_resume(&state, id).await?;
    Ok(Json(render::render(&resume)).into_response())
}

fn pdf_response(doc: ExportedDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.filename),
            ),
        ],
        doc.bytes,
    )
        .into_response()
}

/// POST /api/v1/resumes/:id/export — rasterization and PDF emit run on the
/// blocking pool.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let resume = current_resume(&state, id).await?;
    let rasterizer = state.rasterizer.clone();
    let doc = tokio::task::spawn_blocking(move || {
        let surface = render::render(&resume);
        export_resume_pdf(&surface, rasterizer.as_ref(), &resume.title)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("export task panicked: {e}")))??;
    Ok(pdf_response(doc))
}

#[derive(Deserialize)]
pub struct CertificateRequest {
    #[serde(default)]
    pub name: String,
}

/// POST /api/v1/certificate
pub async fn handle_certificate(
    State(state): State<AppState>,
    Json(req): Json<CertificateRequest>,
) -> Result<Response, AppError> {
    let rasterizer = state.rasterizer.clone();
    let doc = tokio::task::spawn_blocking(move || {
        let surface = render::certificate::certificate_surface(&req.name);
        export_certificate_pdf(&surface, rasterizer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("export task panicked: {e}")))??;
    Ok(pdf_response(doc))
}
