use serde::Deserialize;

use crate::field_rules;
use crate::task::TaskCategory;
use crate::validation_error::ValidationError;

/// Raw POST /api/tasks body. Fields deserialize loosely and are checked
/// in `validate`, so the client gets the first failing rule's message
/// instead of a serde error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field_rules::int_or_string")]
    pub priority: Option<i64>,
    pub category: Option<String>,
}

/// Create payload after validation. Omitted optionals stay None here;
/// defaults are applied when the row is built, not by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub priority: Option<u8>,
    pub category: Option<TaskCategory>,
}

impl CreateTaskRequest {
    pub fn validate(self) -> Result<NewTask, ValidationError> {
        let title = field_rules::validate_title(self.title.as_deref().unwrap_or(""))?;
        let priority = self.priority.map(field_rules::validate_priority).transpose()?;
        let category = self
            .category
            .as_deref()
            .map(field_rules::validate_category)
            .transpose()?;

        Ok(NewTask {
            title,
            priority,
            category,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(body: serde_json::Value) -> CreateTaskRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn minimal_body_validates() {
        let payload = from_json(json!({"title": "Buy milk"})).validate().unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.priority, None);
        assert_eq!(payload.category, None);
    }

    #[test]
    fn missing_title_is_first_failure() {
        let err = from_json(json!({"priority": 3})).validate().unwrap_err();
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn priority_accepts_numeric_string() {
        let payload = from_json(json!({"title": "Buy milk", "priority": "7"}))
            .validate()
            .unwrap();
        assert_eq!(payload.priority, Some(7));
    }

    #[test]
    fn priority_out_of_range_rejected() {
        let err = from_json(json!({"title": "Buy milk", "priority": 11}))
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "Priority must be between 1 and 10");
    }

    #[test]
    fn category_must_be_in_fixed_set() {
        let payload = from_json(json!({"title": "Stretch", "category": "health"}))
            .validate()
            .unwrap();
        assert_eq!(payload.category, Some(TaskCategory::Health));

        let err = from_json(json!({"title": "Stretch", "category": "fitness"}))
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "Invalid category");
    }

    #[test]
    fn non_numeric_priority_string_fails_at_deserialization() {
        let result: Result<CreateTaskRequest, _> =
            serde_json::from_value(json!({"title": "Buy milk", "priority": "high"}));
        assert!(result.is_err());
    }
}
