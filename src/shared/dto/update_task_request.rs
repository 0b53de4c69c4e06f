use serde::Deserialize;

use crate::field_rules;
use crate::task::TaskCategory;
use crate::validation_error::ValidationError;

/// Raw PATCH /api/tasks/{id} body. Unknown fields are ignored, so a body
/// made only of unrecognized keys counts as empty.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub done: Option<bool>,
    #[serde(default, deserialize_with = "field_rules::int_or_string")]
    pub priority: Option<i64>,
    pub category: Option<String>,
}

/// Validated partial update. At least one field is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
    pub priority: Option<u8>,
    pub category: Option<TaskCategory>,
}

impl UpdateTaskRequest {
    pub fn validate(self) -> Result<TaskPatch, ValidationError> {
        if self.title.is_none()
            && self.done.is_none()
            && self.priority.is_none()
            && self.category.is_none()
        {
            return Err(ValidationError::new("Body must contain at least one field"));
        }

        let title = self
            .title
            .as_deref()
            .map(field_rules::validate_title)
            .transpose()?;
        let priority = self.priority.map(field_rules::validate_priority).transpose()?;
        let category = self
            .category
            .as_deref()
            .map(field_rules::validate_category)
            .transpose()?;

        Ok(TaskPatch {
            title,
            done: self.done,
            priority,
            category,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────
