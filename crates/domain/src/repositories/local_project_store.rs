//! LocalProjectStore - file-system side of project persistence

use crate::entities::ProjectRecord;
use crate::errors::ProjectResult;
use async_trait::async_trait;

/// Unvalidated project configuration as read from the local store
pub type RawProjectConfig = serde_json::Value;

/// Local store contract. Paths are the identifiers of local projects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalProjectStore: Send + Sync {
    /// Synchronous existence check used during identifier classification
    fn exists(&self, path: &str) -> bool;

    /// Raw configuration, before any schema validation
    async fn get(&self, path: &str) -> ProjectResult<RawProjectConfig>;

    /// Fully typed project record
    async fn get_project(&self, path: &str) -> ProjectResult<ProjectRecord>;

    /// Write a project record.
    ///
    /// The project is keyed by `path`, which is its identity in this store;
    /// `record.id` may be discarded by implementations that do not persist it.
    /// `models` replaces the model list when given (bootstrap passes an empty
    /// list); `None` keeps whatever the store already holds.
    async fn set_project(
        &self,
        path: &str,
        record: &ProjectRecord,
        models: Option<Vec<serde_json::Value>>,
    ) -> ProjectResult<()>;
}
