//! Plain project records exchanged with the stores

use serde::{Deserialize, Serialize};

/// Serialisable snapshot of a project's four persisted fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,

    /// Creation timestamp in milliseconds, set by the store or the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Partial update sent to the remote store. Identity and creation time are
/// never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: Option<String>,
}
