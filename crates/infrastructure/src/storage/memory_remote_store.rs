//! InMemoryRemoteStore - remote project store held in process memory
//!
//! Stands in for the projects API where no transport is configured, and
//! records every partial update it receives.

use async_trait::async_trait;
use hapify_domain::{
    ProjectError, ProjectRecord, ProjectResult, ProjectUpdate, RemoteProjectStore, StorageType,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryRemoteStore {
    records: RwLock<HashMap<String, ProjectRecord>>,
    updates: RwLock<Vec<(String, ProjectUpdate)>>,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a record
    pub async fn insert(&self, record: ProjectRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    pub async fn record(&self, id: &str) -> Option<ProjectRecord> {
        self.records.read().await.get(id).cloned()
    }

    /// Every update received, oldest first
    pub async fn updates(&self) -> Vec<(String, ProjectUpdate)> {
        self.updates.read().await.clone()
    }
}

#[async_trait]
impl RemoteProjectStore for InMemoryRemoteStore {
    async fn get(&self, id: &str) -> ProjectResult<ProjectRecord> {
        self.record(id).await.ok_or_else(|| ProjectError::NotFound {
            backend: StorageType::Remote,
            id: id.to_string(),
        })
    }

    async fn update(&self, id: &str, update: &ProjectUpdate) -> ProjectResult<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(id).ok_or_else(|| ProjectError::NotFound {
            backend: StorageType::Remote,
            id: id.to_string(),
        })?;

        record.name = update.name.clone();
        record.description = update.description.clone();
        self.updates
            .write()
            .await
            .push((id.to_string(), update.clone()));
        Ok(())
    }
}
