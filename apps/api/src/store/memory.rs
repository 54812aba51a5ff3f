//! In-memory store adapter, used by tests and by deployments without a
//! database configured.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRecord, ResumeSummary};

use super::{ResumeStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    records: DashMap<Uuid, ResumeRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryStore {
    async fn create(&self, owner_id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError> {
        let now = Utc::now();
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            owner_id,
            resume,
            created_at: now,
            updated_at: now,
        };
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn load(&self, id: Uuid) -> Result<ResumeRecord, StoreError> {
        self.records
            .get(&id)
            .map(|r| r.clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn save(&self, id: Uuid, resume: Resume) -> Result<ResumeRecord, StoreError> {
        let mut entry = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.resume = resume;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<ResumeSummary>, StoreError> {
        let mut rows: Vec<ResumeSummary> = self
            .records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .map(|r| ResumeSummary {
                id: r.id,
                title: r.resume.title.clone(),
                template: r.resume.template.clone(),
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_load_round_trip() {
        let store = InMemoryStore::new();
        let owner = Uuid::new_v4();
        let mut resume = Resume::new("Round Trip");
        resume.skills.push("Rust".to_string());

        let record = store.create(owner, resume.clone()).await.unwrap();
        let loaded = store.load(record.id).await.unwrap();
        assert_eq!(loaded.resume, resume);
        assert_eq!(loaded.owner_id, owner);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_snapshot() {
        let store = InMemoryStore::new();
        let record = store
            .create(Uuid::new_v4(), Resume::new("Before"))
            .await
            .unwrap();

        let mut updated = record.resume.clone();
        updated.title = "After".to_string();
        let saved = store.save(record.id, updated).await.unwrap();
        assert_eq!(saved.resume.title, "After");
        assert!(saved.updated_at >= record.updated_at);
        assert_eq!(saved.created_at, record.created_at);
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.load(id).await.unwrap_err(),
            StoreError::NotFound(missing) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_remove_then_load_fails() {
        let store = InMemoryStore::new();
        let record = store
            .create(Uuid::new_v4(), Resume::new("Gone"))
            .await
            .unwrap();
        store.remove(record.id).await.unwrap();
        assert!(store.load(record.id).await.is_err());
        assert!(store.remove(record.id).await.is_err());
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_recent_first() {
        let store = InMemoryStore::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let first = store.create(owner, Resume::new("First")).await.unwrap();
        let second = store.create(owner, Resume::new("Second")).await.unwrap();
        store.create(other, Resume::new("Theirs")).await.unwrap();

        // Touch the older record so it becomes the most recent.
        store
            .save(first.id, first.resume.clone())
            .await
            .unwrap();

        let rows = store.list(owner).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first.id);
        assert_eq!(rows[1].id, second.id);
    }
}
