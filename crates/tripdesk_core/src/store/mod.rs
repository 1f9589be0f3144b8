//! Key-value store contracts.
//!
//! # Responsibility
//! - Provide the single synchronous I/O boundary: string values under fixed
//!   string keys.
//! - Keep transport details (SQLite, process memory) out of repositories.
//!
//! # Invariants
//! - `set` replaces the whole value under a key; there are no partial writes.
//! - `get` of an absent key is `Ok(None)`, never an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store transport failure ("storage unavailable").
#[derive(Debug)]
pub enum StoreError {
    /// The SQLite file could not be opened, read, or written.
    Sqlite(rusqlite::Error),
    /// The store file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// Backend refused the operation (quota, read-only, offline).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite store failure: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "store schema version {found} is newer than supported {supported}"
            ),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
