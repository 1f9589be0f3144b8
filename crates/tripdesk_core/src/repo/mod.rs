//! Repository layer: typed collections and singletons over the key-value
//! store.
//!
//! # Responsibility
//! - Map each record type to its fixed storage key.
//! - Encode/decode full collections as JSON.
//!
//! # Invariants
//! - Writes always replace the whole collection under its key.
//! - Absent keys read as an empty collection (or `None` for singletons).
//! - Corrupt JSON degrades to empty/`None` with a `warn` event; it never
//!   fails the read.

use crate::model::drawing::DrawingRecord;
use crate::model::journal::JournalRecord;
use crate::model::ledger::{LedgerRecord, SavingsGoal};
use crate::model::prefs::Theme;
use crate::model::topic::TopicRecord;
use crate::store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod record_repo;
pub mod singleton_repo;

/// Storage key of the topic list.
pub const TOPICS_KEY: &str = "dsa-topics";
/// Storage key of the journal entry list.
pub const JOURNAL_ENTRIES_KEY: &str = "journal-entries";
/// Storage key of the savings entry list.
pub const SAVINGS_ENTRIES_KEY: &str = "savings-entries";
/// Storage key of the savings goal singleton.
pub const SAVINGS_GOAL_KEY: &str = "savings-goal";
/// Storage key of the saved drawing gallery.
pub const DRAWINGS_KEY: &str = "drawings";
/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode { key: &'static str, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode { key, message } => {
                write!(f, "failed to encode value for `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Record type persisted as a list under one key.
pub trait StoredCollection: Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;

    fn record_id(&self) -> &str;
}

/// Value persisted alone under one key.
pub trait StoredSingleton: Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;
}

impl StoredCollection for TopicRecord {
    const STORAGE_KEY: &'static str = TOPICS_KEY;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl StoredCollection for JournalRecord {
    const STORAGE_KEY: &'static str = JOURNAL_ENTRIES_KEY;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl StoredCollection for LedgerRecord {
    const STORAGE_KEY: &'static str = SAVINGS_ENTRIES_KEY;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl StoredCollection for DrawingRecord {
    const STORAGE_KEY: &'static str = DRAWINGS_KEY;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl StoredSingleton for SavingsGoal {
    const STORAGE_KEY: &'static str = SAVINGS_GOAL_KEY;
}

impl StoredSingleton for Theme {
    const STORAGE_KEY: &'static str = THEME_KEY;
}
