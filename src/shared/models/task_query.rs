use crate::task::{Task, TaskCategory};

// ── Filter vocabulary ─────────────────────────────────────────

/// View restriction on the `done` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Undone,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(StatusFilter::All),
            "done" => Some(StatusFilter::Done),
            "undone" => Some(StatusFilter::Undone),
            _ => None,
        }
    }
}

/// Sort direction for the priority column. Ascending when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

// ── The composed query ────────────────────────────────────────

/// A fully validated list query. Filters combine conjunctively; a
/// default-constructed filter matches every row.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Substring match on title. Held lowercased and trimmed; None when
    /// the caller sent nothing (or only whitespace).
    pub q: Option<String>,
    pub status: StatusFilter,
    pub order: SortOrder,
    /// None = every category.
    pub category: Option<TaskCategory>,
}

impl TaskFilter {
    /// Whether a row passes every active filter.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(q) = &self.q {
            if !task.title.to_lowercase().contains(q.as_str()) {
                return false;
            }
        }
        match self.status {
            StatusFilter::All => {}
            StatusFilter::Done => {
                if !task.done {
                    return false;
                }
            }
            StatusFilter::Undone => {
                if task.done {
                    return false;
                }
            }
        }
        if let Some(category) = self.category {
            if task.category != category {
                return false;
            }
        }
        true
    }

    /// Order rows by priority. No secondary key; ties keep store order.
    pub fn sort(&self, tasks: &mut [Task]) {
        match self.order {
            SortOrder::Asc => tasks.sort_by(|a, b| a.priority.cmp(&b.priority)),
            SortOrder::Desc => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
