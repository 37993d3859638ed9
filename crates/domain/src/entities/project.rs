//! Project - the project entity and its load/save lifecycle
//!
//! A project is bound to exactly one backend, chosen by classifying its
//! identifier. Loading and saving route through that backend; everything
//! else behaves the same for local and remote projects.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{ProjectRecord, ProjectUpdate};
use crate::channel::ChannelLike;
use crate::config::ProjectDefaults;
use crate::errors::ProjectResult;
use crate::repositories::{LocalProjectStore, ProjectBackends};
use crate::validation::transform_validation_message;
use crate::value_objects::{ProjectRef, StorageType};

/// Handle shared by every caller that asked the registry for the same identifier
pub type SharedProject = Arc<RwLock<Project>>;

#[derive(Debug)]
pub struct Project {
    reference: ProjectRef,
    created_at: Option<i64>,
    name: String,
    description: Option<String>,
    backends: ProjectBackends,
}

impl Project {
    /// Create an unloaded project for `id`, failing fast when the identifier
    /// is neither a remote token nor an existing local path.
    pub fn new(backends: ProjectBackends, id: &str) -> ProjectResult<Self> {
        let reference = ProjectRef::classify(id, backends.local.as_ref())?;
        Ok(Self {
            reference,
            created_at: None,
            name: String::new(),
            description: None,
            backends,
        })
    }

    /// Create a project hydrated from a record, without a backend round trip
    pub fn from_record(backends: ProjectBackends, record: ProjectRecord) -> ProjectResult<Self> {
        let mut project = Self::new(backends, &record.id)?;
        project.from_object(record)?;
        Ok(project)
    }

    pub fn id(&self) -> &str {
        self.reference.as_str()
    }

    pub fn reference(&self) -> &ProjectRef {
        &self.reference
    }

    pub fn storage_type(&self) -> StorageType {
        self.reference.storage_type()
    }

    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Reassign the identifier, re-running classification.
    ///
    /// Either both identity and storage type change or neither does.
    pub fn set_id(&mut self, id: &str) -> ProjectResult<()> {
        let reference = ProjectRef::classify(id, self.backends.local.as_ref())?;
        if reference.storage_type() != self.reference.storage_type() {
            warn!(
                from = %self.reference,
                to = %reference,
                "Project identifier reassignment switches storage backend"
            );
        }
        self.reference = reference;
        Ok(())
    }

    pub fn set_created_at(&mut self, created_at: Option<i64>) {
        self.created_at = created_at;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replace name and description in one go. Nothing is persisted.
    pub fn set_name_and_description(&mut self, name: impl Into<String>, description: Option<String>) {
        self.name = name.into();
        self.description = description;
    }

    /// Hydrate from a record. The identifier is classified before any field
    /// changes, so a rejected identifier leaves the project untouched.
    pub fn from_object(&mut self, record: ProjectRecord) -> ProjectResult<&mut Self> {
        self.set_id(&record.id)?;
        self.created_at = record.created_at;
        self.name = record.name;
        self.description = record.description;
        Ok(self)
    }

    pub fn to_object(&self) -> ProjectRecord {
        ProjectRecord {
            id: self.id().to_string(),
            created_at: self.created_at,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Fetch the project from its backend and hydrate this instance.
    ///
    /// Local configurations are schema-validated first; remote records are
    /// taken as returned. On failure no field is modified.
    pub async fn load(&mut self) -> ProjectResult<()> {
        let record = match &self.reference {
            ProjectRef::Local(path) => {
                let raw = self.backends.local.get(path.as_str()).await?;
                if let Err(issue) = self.backends.validator.validate(&raw) {
                    warn!(project = path.as_str(), %issue, "Project config rejected by schema");
                    return Err(transform_validation_message(&issue));
                }
                self.backends.local.get_project(path.as_str()).await?
            }
            ProjectRef::Remote(token) => self.backends.remote.get(token.as_str()).await?,
        };

        self.from_object(record)?;
        info!(project = self.id(), storage = %self.storage_type(), "Project loaded");
        Ok(())
    }

    /// Persist this instance to its backend.
    ///
    /// Local projects write the full record; remote projects only send the
    /// mutable fields.
    pub async fn save(&self) -> ProjectResult<()> {
        match &self.reference {
            ProjectRef::Local(path) => {
                self.backends
                    .local
                    .set_project(path.as_str(), &self.to_object(), None)
                    .await?;
            }
            ProjectRef::Remote(token) => {
                let update = ProjectUpdate {
                    name: self.name.clone(),
                    description: self.description.clone(),
                };
                self.backends.remote.update(token.as_str(), &update).await?;
            }
        }

        info!(project = self.id(), storage = %self.storage_type(), "Project saved");
        Ok(())
    }

    /// Write a brand-new local project record for a channel using the
    /// built-in default name and description.
    pub async fn create_local_for_channel(
        local: &dyn LocalProjectStore,
        channel: &dyn ChannelLike,
        name: Option<String>,
        description: Option<String>,
    ) -> ProjectResult<()> {
        Self::create_local_for_channel_with(
            local,
            channel,
            &ProjectDefaults::default(),
            name,
            description,
        )
        .await
    }

    /// Bootstrap variant taking explicit defaults. Bypasses any registry and
    /// any existing instance; the model list is written empty.
    pub async fn create_local_for_channel_with(
        local: &dyn LocalProjectStore,
        channel: &dyn ChannelLike,
        defaults: &ProjectDefaults,
        name: Option<String>,
        description: Option<String>,
    ) -> ProjectResult<()> {
        let path = channel.guess_project_id_or_path();
        let record = ProjectRecord {
            id: channel.config().project.clone(),
            created_at: None,
            name: name.unwrap_or_else(|| defaults.name.clone()),
            description: Some(description.unwrap_or_else(|| defaults.description.clone())),
        };

        debug!(path = %path, project = %record.id, "Creating local project for channel");
        local.set_project(&path, &record, Some(Vec::new())).await
    }
}
