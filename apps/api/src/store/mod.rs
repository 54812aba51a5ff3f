//! Persistence port for saved resumes. The engine only sees this trait;
//! Postgres and in-memory adapters live alongside it.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRecord, ResumeSummary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored document is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-snapshot persistence: save/load always move the complete document,
/// never a diff. Listing is ordered by `updated_at` descending.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create(&self, owner_id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError>;
    async fn load(&self, id: Uuid) -> Result<ResumeRecord, StoreError>;
    async fn save(&self, id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError>;
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
    async fn list(&self, owner_id: Uuid) -> Result<Vec<ResumeSummary>, StoreError>;
}
