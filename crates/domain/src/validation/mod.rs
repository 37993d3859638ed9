//! Project configuration validation port
//!
//! Validators report failures in their own vocabulary: a field path plus a
//! message whose subject is the quoted field label (`"name" is required`).
//! [`transform_validation_message`] is the one place that rewrites such a
//! descriptor into a domain error.

use crate::errors::ProjectError;
use crate::repositories::RawProjectConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw failure descriptor produced by a validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path to the offending value, outermost key first. Empty for the root.
    pub path: Vec<String>,
    /// Message as emitted by the validator
    pub message: String,
}

impl ValidationIssue {
    pub fn new<P, S>(path: P, message: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Dotted field path, `value` for the document root
    pub fn dotted_path(&self) -> String {
        if self.path.is_empty() {
            "value".to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.dotted_path())
    }
}

/// Schema validation of a raw local project configuration
#[cfg_attr(test, mockall::automock)]
pub trait ProjectConfigValidator: Send + Sync {
    fn validate(&self, raw: &RawProjectConfig) -> Result<(), ValidationIssue>;
}

/// Rewrite a validator issue into the domain error vocabulary.
///
/// A leading quoted label is replaced by the dotted path of the field, so
/// `"name" is required` at `["project", "name"]` becomes
/// `project.name is required`. Messages without a quoted label are prefixed
/// with the path.
pub fn transform_validation_message(issue: &ValidationIssue) -> ProjectError {
    let field = issue.dotted_path();
    let message = match strip_quoted_label(&issue.message) {
        Some(rest) => format!("{field}{rest}"),
        None => format!("{field}: {}", issue.message),
    };

    ProjectError::Validation { field, message }
}

fn strip_quoted_label(message: &str) -> Option<&str> {
    let rest = message.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[end + 1..])
}
