//! FileProjectStore - local projects as JSON files
//!
//! The identifier of a local project is the path of its project file. The
//! file holds name, description, creation time and the model list; the id is
//! not stored since the path already is the id.

use async_trait::async_trait;
use hapify_common::OperationTimer;
use hapify_domain::config::StorageConfig;
use hapify_domain::{
    LocalProjectStore, ProjectError, ProjectRecord, ProjectResult, RawProjectConfig, StorageType,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// On-disk layout of a project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub models: Vec<Value>,
    /// Keys this store does not interpret, preserved across writes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct FileProjectStore {
    config: StorageConfig,
}

impl FileProjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    async fn read_raw(&self, path: &str) -> ProjectResult<Value> {
        let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProjectError::NotFound {
                backend: StorageType::Local,
                id: path.to_string(),
            },
            _ => io_error("read", path, e),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ProjectError::storage(StorageType::Local, format!("{path} is not valid JSON: {e}"))
        })
    }

    async fn read_document(&self, path: &str) -> ProjectResult<ProjectDocument> {
        let raw = self.read_raw(path).await?;
        serde_json::from_value(raw).map_err(|e| {
            ProjectError::storage(StorageType::Local, format!("{path} is not a project file: {e}"))
        })
    }

    async fn write_document(&self, path: &str, document: &ProjectDocument) -> ProjectResult<()> {
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", path, e))?;
        }

        let encoded = if self.config.pretty_json {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
        .map_err(|e| ProjectError::storage(StorageType::Local, e.to_string()))?;

        fs::write(path, encoded)
            .await
            .map_err(|e| io_error("write", path, e))
    }
}

#[async_trait]
impl LocalProjectStore for FileProjectStore {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    async fn get(&self, path: &str) -> ProjectResult<RawProjectConfig> {
        let mut timer = OperationTimer::new("local.get");
        timer.add_field("path", path);
        let result = self.read_raw(path).await;
        timer.finish_with_result(&result);
        result
    }

    async fn get_project(&self, path: &str) -> ProjectResult<ProjectRecord> {
        let document = self.read_document(path).await?;
        Ok(ProjectRecord {
            id: path.to_string(),
            created_at: document.created_at,
            name: document.name,
            description: document.description,
        })
    }

    async fn set_project(
        &self,
        path: &str,
        record: &ProjectRecord,
        models: Option<Vec<Value>>,
    ) -> ProjectResult<()> {
        let mut timer = OperationTimer::new("local.set_project");
        timer.add_field("path", path);

        let existing = if self.exists(path) {
            Some(self.read_document(path).await?)
        } else {
            None
        };

        let (version, previous_models, previous_created_at, extra) = match existing {
            Some(doc) => (doc.version, doc.models, doc.created_at, doc.extra),
            None => (self.config.schema_version.clone(), Vec::new(), None, Map::new()),
        };

        let created_at = record
            .created_at
            .or(previous_created_at)
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let document = ProjectDocument {
            version,
            name: record.name.clone(),
            description: record.description.clone(),
            created_at: Some(created_at),
            models: models.unwrap_or(previous_models),
            extra,
        };

        debug!(path, models = document.models.len(), "Writing project file");
        let result = self.write_document(path, &document).await;
        timer.finish_with_result(&result);
        result
    }
}

fn io_error(action: &str, path: &str, error: std::io::Error) -> ProjectError {
    ProjectError::storage(
        StorageType::Local,
        format!("failed to {action} {path}: {error}"),
    )
}
