//! RemoteProjectStore - API side of project persistence

use crate::entities::{ProjectRecord, ProjectUpdate};
use crate::errors::ProjectResult;
use async_trait::async_trait;

/// Remote store contract, keyed by remote token
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteProjectStore: Send + Sync {
    /// Fetch a project record
    async fn get(&self, id: &str) -> ProjectResult<ProjectRecord>;

    /// Partial update of the mutable fields
    async fn update(&self, id: &str, update: &ProjectUpdate) -> ProjectResult<()>;
}
