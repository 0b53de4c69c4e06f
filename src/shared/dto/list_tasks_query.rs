use serde::Deserialize;

use crate::field_rules;
use crate::task_query::{SortOrder, StatusFilter, TaskFilter};
use crate::validation_error::ValidationError;

/// Raw GET /api/tasks query params, straight from the URL. Everything is
/// optional text until `validate` runs.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub order: Option<String>,
    pub category: Option<String>,
}

impl ListTasksQuery {
    /// Absent params fall back to: every status, every category,
    /// ascending priority. An unrecognized value is rejected rather than
    /// silently ignored.
    pub fn validate(self) -> Result<TaskFilter, ValidationError> {
        let q = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let status = match self.status.as_deref() {
            None => StatusFilter::default(),
            Some(raw) => StatusFilter::parse(raw)
                .ok_or_else(|| ValidationError::new("Invalid status filter"))?,
        };

        let order = match self.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => {
                SortOrder::parse(raw).ok_or_else(|| ValidationError::new("Invalid sort order"))?
            }
        };

        let category = match self.category.as_deref() {
            None | Some("all") => None,
            Some(raw) => Some(field_rules::validate_category(raw)?),
        };

        Ok(TaskFilter {
            q,
            status,
            order,
            category,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskCategory;

    #[test]
    fn no_params_means_no_filters_ascending() {
        let filter = ListTasksQuery::default().validate().unwrap();
        assert_eq!(filter.q, None);
        assert_eq!(filter.status, StatusFilter::All);
        assert_eq!(filter.order, SortOrder::Asc);
        assert_eq!(filter.category, None);
    }

    #[test]
    fn q_is_trimmed_and_lowercased() {
        let query = ListTasksQuery {
            q: Some("  MiLk  ".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(query.validate().unwrap().q.as_deref(), Some("milk"));
    }

    #[test]
    fn whitespace_q_is_dropped() {
        let query = ListTasksQuery {
            q: Some("   ".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(query.validate().unwrap().q, None);
    }

    #[test]
    fn category_all_clears_the_filter() {
        let query = ListTasksQuery {
            category: Some("all".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(query.validate().unwrap().category, None);

        let query = ListTasksQuery {
            category: Some("study".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(
            query.validate().unwrap().category,
            Some(TaskCategory::Study)
        );
    }

    #[test]
    fn unrecognized_values_are_rejected() {
        let query = ListTasksQuery {
            status: Some("finished".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(
            query.validate().unwrap_err().message,
            "Invalid status filter"
        );

        let query = ListTasksQuery {
            order: Some("up".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(query.validate().unwrap_err().message, "Invalid sort order");

        let query = ListTasksQuery {
            category: Some("errands".into()),
            ..ListTasksQuery::default()
        };
        assert_eq!(query.validate().unwrap_err().message, "Invalid category");
    }

    #[test]
    fn empty_string_enum_param_is_invalid() {
        // `?status=` arrives as Some("") and is not a recognized value.
        let query = ListTasksQuery {
            status: Some(String::new()),
            ..ListTasksQuery::default()
        };
        assert!(query.validate().is_err());
    }
}
