//! Dated journal entry.

use super::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub id: RecordId,
    /// Fixed at creation; content edits never move an entry to another day.
    pub date: NaiveDate,
    pub content: String,
}

impl JournalRecord {
    pub fn new(content: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            date,
            content: content.into(),
        }
    }
}

/// Sorts entries newest day first. Entries of the same day keep their
/// relative order.
pub fn sort_newest_first(entries: &mut [JournalRecord]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
