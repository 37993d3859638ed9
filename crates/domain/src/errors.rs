//! Domain Errors - identity, validation and storage failures
//!
//! Every failure reaching a caller of the project lifecycle is one of these.
//! No retries and no local recovery happen in the domain layer.

use crate::value_objects::StorageType;
use thiserror::Error;

/// Errors raised by project identity resolution and the load/save lifecycle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    /// The identifier is not a remote token and no local project exists at that path
    #[error("Invalid path \"{0}\" for project")]
    InvalidIdentifier(String),

    /// A local project configuration failed schema validation
    #[error("Invalid project config: {message}")]
    Validation { field: String, message: String },

    /// The backing store failed while reading or writing
    #[error("{backend} storage error: {message}")]
    Storage {
        backend: StorageType,
        message: String,
    },

    /// The backing store has no project under this identifier
    #[error("Project {id} not found in {backend} storage")]
    NotFound { backend: StorageType, id: String },
}

/// Domain result type
pub type ProjectResult<T> = Result<T, ProjectError>;

impl ProjectError {
    /// Shorthand used by store implementations
    pub fn storage(backend: StorageType, message: impl Into<String>) -> Self {
        ProjectError::Storage {
            backend,
            message: message.into(),
        }
    }

    pub fn is_identity_error(&self) -> bool {
        matches!(self, ProjectError::InvalidIdentifier(_))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, ProjectError::Validation { .. })
    }

    /// Check if error was surfaced by a backing store
    pub fn is_backend_error(&self) -> bool {
        matches!(
            self,
            ProjectError::Storage { .. } | ProjectError::NotFound { .. }
        )
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        if self.is_identity_error() {
            ErrorCategory::Identity
        } else if self.is_validation_error() {
            ErrorCategory::Validation
        } else {
            ErrorCategory::Backend
        }
    }
}

/// Categories of project errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Identifier could not be classified
    Identity,
    /// Local configuration rejected by the schema
    Validation,
    /// Read or write failure in a backing store
    Backend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categorization() {
        let identity = ProjectError::InvalidIdentifier("./missing".to_string());
        assert!(identity.is_identity_error());
        assert_eq!(identity.category(), ErrorCategory::Identity);

        let validation = ProjectError::Validation {
            field: "name".to_string(),
            message: "name is required".to_string(),
        };
        assert!(validation.is_validation_error());
        assert_eq!(validation.category(), ErrorCategory::Validation);

        let not_found = ProjectError::NotFound {
            backend: StorageType::Remote,
            id: "507f1f77bcf86cd799439011".to_string(),
        };
        assert!(not_found.is_backend_error());
        assert_eq!(not_found.category(), ErrorCategory::Backend);
    }

    #[test]
    fn test_error_messages() {
        let error = ProjectError::InvalidIdentifier("./my-project".to_string());
        assert_eq!(error.to_string(), "Invalid path \"./my-project\" for project");

        let error = ProjectError::storage(StorageType::Local, "permission denied");
        assert_eq!(error.to_string(), "local storage error: permission denied");
    }
}
