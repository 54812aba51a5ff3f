//! Postgres store adapter. Each resume row carries the full document as
//! jsonb plus denormalized title/template columns for cheap listing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRecord, ResumeSummary};

use super::{ResumeStore, StoreError};

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ResumeRow {
    id: Uuid,
    owner_id: Uuid,
    document: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResumeRow {
    fn into_record(self) -> Result<ResumeRecord, StoreError> {
        let resume: Resume = serde_json::from_value(self.document)?;
        Ok(ResumeRecord {
            id: self.id,
            owner_id: self.owner_id,
            resume,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(FromRow)]
struct SummaryRow {
    id: Uuid,
    title: String,
    template: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, owner_id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, owner_id, title, template, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            RETURNING id, owner_id, document, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(&resume.title)
        .bind(&resume.template)
        .bind(Json(&resume))
        .fetch_one(&self.pool)
        .await?;

        row.into_record()
    }

    async fn load(&self, id: Uuid) -> Result<ResumeRecord, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, owner_id, document, created_at, updated_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        row.into_record()
    }

    async fn save(&self, id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = $2, template = $3, document = $4, updated_at = now()
            WHERE id = $1
            RETURNING id, owner_id, document, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&resume.title)
        .bind(&resume.template)
        .bind(Json(&resume))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        row.into_record()
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<ResumeSummary>, StoreError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, title, template, created_at, updated_at
            FROM resumes
            WHERE owner_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ResumeSummary {
                id: r.id,
                title: r.title,
                template: r.template,
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect())
    }
}
