//! Configuration types shared by the domain and infrastructure layers.
//! Loading from files and environment lives in infrastructure.

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HapifyConfig {
    #[serde(default)]
    pub project: ProjectDefaults,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Name and description given to projects created without explicit values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefaults {
    #[serde(default = "default_project_name")]
    pub name: String,

    #[serde(default = "default_project_description")]
    pub description: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            description: default_project_description(),
        }
    }
}

/// Local project file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Version written into new project files
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Indent project files when writing
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pretty_json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json_output: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_output: false,
        }
    }
}

fn default_project_name() -> String {
    "My project".to_string()
}

fn default_project_description() -> String {
    "A new Hapify project".to_string()
}

fn default_schema_version() -> String {
    "1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
