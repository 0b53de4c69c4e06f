use std::sync::Arc;

use crate::data_access::task_store::TaskStore;

/// Per-process state handed to every handler. The store is the only
/// thing shared between requests; no task state lives in memory.
pub struct AppState {
    pub store: TaskStore,
}

pub type SharedState = Arc<AppState>;
