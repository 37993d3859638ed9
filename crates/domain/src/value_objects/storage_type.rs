//! StorageType - which backend a project lives in

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backing store of a project, fixed by the shape of its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// Project file on the local file system
    Local,
    /// Project record held by the remote API
    Remote,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Local => "local",
            StorageType::Remote => "remote",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
