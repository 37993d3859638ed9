//! Structural schema for local project files
//!
//! Checks run in document order and the first violation is reported, with
//! messages in the validator's own label-quoted form.

use hapify_domain::{ProjectConfigValidator, RawProjectConfig, ValidationIssue};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectConfigSchema;

impl ProjectConfigSchema {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectConfigValidator for ProjectConfigSchema {
    fn validate(&self, raw: &RawProjectConfig) -> Result<(), ValidationIssue> {
        let root = raw.as_object().ok_or_else(|| {
            ValidationIssue::new(Vec::<String>::new(), "\"value\" must be of type object")
        })?;

        required_string("version", root)?;

        let name = required_string("name", root)?;
        if name.trim().is_empty() {
            return Err(ValidationIssue::new(["name"], "\"name\" is not allowed to be empty"));
        }

        match root.get("description") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => {
                return Err(ValidationIssue::new(
                    ["description"],
                    "\"description\" must be a string",
                ))
            }
        }

        if let Some(created_at) = root.get("created_at") {
            if !created_at.is_i64() {
                return Err(ValidationIssue::new(
                    ["created_at"],
                    "\"created_at\" must be an integer",
                ));
            }
        }

        match root.get("models") {
            None => Err(ValidationIssue::new(["models"], "\"models\" is required")),
            Some(Value::Array(models)) => validate_models(models),
            Some(_) => Err(ValidationIssue::new(["models"], "\"models\" must be an array")),
        }
    }
}

fn required_string<'a>(key: &str, root: &'a Map<String, Value>) -> Result<&'a str, ValidationIssue> {
    match root.get(key) {
        None => Err(ValidationIssue::new([key], format!("\"{key}\" is required"))),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ValidationIssue::new([key], format!("\"{key}\" must be a string"))),
    }
}

fn validate_models(models: &[Value]) -> Result<(), ValidationIssue> {
    for (index, model) in models.iter().enumerate() {
        if !model.is_object() {
            return Err(ValidationIssue::new(
                ["models".to_string(), index.to_string()],
                format!("\"[{index}]\" must be of type object"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hapify_domain::transform_validation_message;
    use serde_json::json;

    fn validate(value: Value) -> Result<(), ValidationIssue> {
        ProjectConfigSchema::new().validate(&value)
    }

    #[test]
    fn test_minimal_document_is_valid() {
        assert!(validate(json!({ "version": "1", "name": "Demo", "models": [] })).is_ok());
    }

    #[test]
    fn test_null_description_is_allowed() {
        let doc = json!({ "version": "1", "name": "Demo", "description": null, "models": [] });
        assert!(validate(doc).is_ok());
    }

    #[test]
    fn test_missing_name_is_reported() {
        let issue = validate(json!({ "version": "1", "models": [] })).unwrap_err();
        assert_eq!(issue, ValidationIssue::new(["name"], "\"name\" is required"));
    }

    #[test]
    fn test_non_object_root() {
        let issue = validate(json!([1, 2])).unwrap_err();
        assert!(issue.path.is_empty());
    }

    #[test]
    fn test_model_entries_must_be_objects() {
        let issue = validate(json!({ "version": "1", "name": "Demo", "models": [{}, 3] })).unwrap_err();
        assert_eq!(issue.path, vec!["models".to_string(), "1".to_string()]);

        let err = transform_validation_message(&issue);
        assert_eq!(
            err.to_string(),
            "Invalid project config: models.1 must be of type object"
        );
    }
}
