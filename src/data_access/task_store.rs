//! Task rows ↔ redb persistence.
//!
//! One table, one row per task, keyed by the task's UUID bytes. Every
//! call opens its own transaction; nothing is cached between requests.

use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::task::Task;
use crate::task_query::TaskFilter;
use crate::update_task_request::TaskPatch;

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");

/// Thin handle to the redb file. Cloneable (Arc inside).
#[derive(Clone)]
pub struct TaskStore {
    db: Arc<Database>,
}

impl TaskStore {
    /// Open (or create) the database at the given path and make sure the
    /// tasks table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        {
            let _ = txn.open_table(TASKS_TABLE)?;
        }
        txn.commit()?;

        Ok(TaskStore { db: Arc::new(db) })
    }

    /// Insert a freshly built row.
    pub fn insert(&self, task: &Task) -> Result<(), StoreError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(TASKS_TABLE)?;
            let bytes = encode(task)?;
            table.insert(task.id.as_bytes().as_slice(), bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(TASKS_TABLE)?;

        match table.get(id.as_bytes().as_slice())? {
            Some(data) => Ok(Some(decode(data.value())?)),
            None => Ok(None),
        }
    }

    /// All rows passing the filter, sorted by priority in the requested
    /// direction.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let task = decode(value.value())?;
            if filter.matches(&task) {
                tasks.push(task);
            }
        }

        filter.sort(&mut tasks);
        Ok(tasks)
    }

    /// Apply a partial update to the row with the given id. Read and
    /// write share one transaction. Returns the updated row, or None if
    /// no row matched.
    pub fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<Option<Task>, StoreError> {
        let txn = self.db.begin_write()?;
        let updated = {
            let mut table = txn.open_table(TASKS_TABLE)?;

            let existing = match table.get(id.as_bytes().as_slice())? {
                Some(data) => Some(decode(data.value())?),
                None => None,
            };

            match existing {
                None => None,
                Some(mut task) => {
                    task.apply_patch(patch);
                    let bytes = encode(&task)?;
                    table.insert(id.as_bytes().as_slice(), bytes.as_slice())?;
                    Some(task)
                }
            }
        };
        txn.commit()?;
        Ok(updated)
    }

    /// Remove the row with the given id. Returns whether a row existed.
    pub fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let txn = self.db.begin_write()?;
        let deleted;
        {
            let mut table = txn.open_table(TASKS_TABLE)?;
            deleted = table.remove(id.as_bytes().as_slice())?.is_some();
        }
        txn.commit()?;
        Ok(deleted)
    }
}

fn encode(task: &Task) -> Result<Vec<u8>, StoreError> {
    postcard::to_allocvec(task).map_err(|e| StoreError::Encode(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Task, StoreError> {
    postcard::from_bytes(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

// ── Errors ─────────────────────────────────────────────────────

#[derive(Debug)]
pub enum StoreError {
    Redb(String),
    Decode(String),
    Encode(String),
}

// redb 2.x has many error types. Blanket them all into StoreError::Redb.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Redb(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Redb(e) => write!(f, "redb: {e}"),
            StoreError::Decode(e) => write!(f, "decode: {e}"),
            StoreError::Encode(e) => write!(f, "encode: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

// ── Tests ──────────────────────────────────────────────────────
