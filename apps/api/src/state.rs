use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::config::Config;
use crate::export::raster::Rasterizer;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    pub llm: LlmClient,
    /// Pluggable rasterizer behind the export pipeline. Default: BandRasterizer.
    pub rasterizer: Arc<dyn Rasterizer>,
    /// Unsaved working copies, one per draft session. A mutation replaces the
    /// whole snapshot under the entry lock, so readers never observe a
    /// half-applied edit.
    pub drafts: Arc<DashMap<Uuid, Resume>>,
    pub config: Config,
}
