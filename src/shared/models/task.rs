use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::update_task_request::TaskPatch;

// Validation bounds shared by the create and update paths.
pub const TITLE_MAX_CHARS: usize = 200;
pub const PRIORITY_MIN: u8 = 1;
pub const PRIORITY_MAX: u8 = 10;
pub const DEFAULT_PRIORITY: u8 = 5;

/// Classification tag drawn from a fixed set. Anything else is rejected
/// at the API edge before a row is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Work,
    Home,
    Study,
    Health,
    Other,
}

impl TaskCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(TaskCategory::Work),
            "home" => Some(TaskCategory::Home),
            "study" => Some(TaskCategory::Study),
            "health" => Some(TaskCategory::Health),
            "other" => Some(TaskCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Home => "home",
            TaskCategory::Study => "study",
            TaskCategory::Health => "health",
            TaskCategory::Other => "other",
        }
    }
}

/// The one persisted entity. `id` and `created_at` are assigned on insert
/// and never change afterwards; everything else is patchable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    pub priority: u8,
    pub category: TaskCategory,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a fresh row from a validated create payload.
    /// Omitted fields take their documented defaults: priority 5,
    /// category "other", not done.
    pub fn new(title: String, priority: Option<u8>, category: Option<TaskCategory>) -> Self {
        Task {
            id: Uuid::new_v4(),
            title,
            done: false,
            priority: priority.unwrap_or(DEFAULT_PRIORITY),
            category: category.unwrap_or(TaskCategory::Other),
            created_at: Utc::now(),
        }
    }

    /// Apply a validated partial update. Absent fields keep their value.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_every_fixed_value() {
        for name in ["work", "home", "study", "health", "other"] {
            let category = TaskCategory::parse(name).unwrap();
            assert_eq!(category.as_str(), name);
        }
        assert_eq!(TaskCategory::parse("chores"), None);
        assert_eq!(TaskCategory::parse("Work"), None); // case-sensitive
    }

    #[test]
    fn new_task_applies_defaults() {
        let task = Task::new("Buy milk".into(), None, None);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert_eq!(task.category, TaskCategory::Other);
        assert!(!task.done);
    }

    #[test]
    fn new_task_keeps_explicit_fields() {
        let task = Task::new("Revise notes".into(), Some(9), Some(TaskCategory::Study));
        assert_eq!(task.priority, 9);
        assert_eq!(task.category, TaskCategory::Study);
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let mut task = Task::new("Buy milk".into(), Some(7), Some(TaskCategory::Home));
        let before = task.clone();

        task.apply_patch(&TaskPatch {
            done: Some(true),
            ..TaskPatch::default()
        });

        assert!(task.done);
        assert_eq!(task.title, before.title);
        assert_eq!(task.priority, before.priority);
        assert_eq!(task.category, before.category);
        assert_eq!(task.created_at, before.created_at);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let task = Task::new("Buy milk".into(), None, None);
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["category"], "other");
        assert_eq!(json["done"], false);
        assert_eq!(json["priority"], 5);
    }
}
