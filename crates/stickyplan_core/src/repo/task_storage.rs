//! Task list persistence contract and implementations.
//!
//! # Responsibility
//! - Serialize the whole task list as one JSON array under a fixed key.
//! - Provide SQLite-backed and in-memory storage slots.
//!
//! # Invariants
//! - A missing slot loads as an empty list.
//! - Stored data that fails task validation or repeats an id is reported,
//!   not masked.

use crate::db::{kv_get, kv_set, DbError};
use crate::model::task::{Task, TaskId};
use log::debug;
use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used by the planner since its first release.
pub const DEFAULT_STORAGE_KEY: &str = "sticky-tasks";

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while reading or writing the persisted task list.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize(serde_json::Error),
    InvalidData(String),
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize tasks: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::Unavailable(message) => write!(f, "task storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::InvalidData(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for the full task list.
pub trait TaskStorage {
    /// Loads the persisted list, or an empty list when nothing was saved.
    fn load(&self) -> StorageResult<Vec<Task>>;
    /// Replaces the persisted list with `tasks`.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}

impl<S: TaskStorage + ?Sized> TaskStorage for &S {
    fn load(&self) -> StorageResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        (**self).save(tasks)
    }
}

/// Encodes tasks as the persisted JSON array.
pub fn encode_tasks(tasks: &[Task]) -> StorageResult<String> {
    serde_json::to_string(tasks).map_err(StorageError::Serialize)
}

/// Decodes the persisted JSON array, validating every record.
///
/// Ids must be unique across the array.
pub fn decode_tasks(payload: &str) -> StorageResult<Vec<Task>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_str(payload)
        .map_err(|err| StorageError::InvalidData(err.to_string()))?;

    if let Some(duplicate) = first_duplicate_id(&tasks) {
        return Err(StorageError::InvalidData(format!(
            "duplicate task id: {duplicate}"
        )));
    }
    Ok(tasks)
}

fn first_duplicate_id(tasks: &[Task]) -> Option<&TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .iter()
        .map(|task| &task.id)
        .find(|id| !seen.insert(id.as_str()))
}

/// Task list stored in the SQLite `kv_store` table under one key.
pub struct SqliteTaskStorage<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteTaskStorage<'conn> {
    /// Uses `DEFAULT_STORAGE_KEY`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }
}

impl TaskStorage for SqliteTaskStorage<'_> {
    fn load(&self) -> StorageResult<Vec<Task>> {
        let tasks = match kv_get(self.conn, &self.key)? {
            Some(payload) => decode_tasks(&payload)?,
            None => Vec::new(),
        };
        debug!(
            "event=tasks_load module=storage status=ok backend=sqlite count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let payload = encode_tasks(tasks)?;
        kv_set(self.conn, &self.key, &payload)?;
        debug!(
            "event=tasks_save module=storage status=ok backend=sqlite count={}",
            tasks.len()
        );
        Ok(())
    }
}

/// In-process storage slot holding the serialized JSON payload.
///
/// Writes can be switched off to exercise persistence-failure paths.
#[derive(Debug, Default)]
pub struct MemoryTaskStorage {
    payload: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with a raw payload, as if written by an earlier session.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.payload.replace(Some(payload.into()));
        storage
    }

    /// Returns the raw serialized payload, if any was written.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Makes subsequent saves fail with `StorageError::Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl TaskStorage for MemoryTaskStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        match self.payload.borrow().as_deref() {
            Some(payload) => decode_tasks(payload),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        let payload = encode_tasks(tasks)?;
        self.payload.replace(Some(payload));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
