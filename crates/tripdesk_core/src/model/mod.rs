//! Domain records for the four desk tools.
//!
//! # Responsibility
//! - Define the persisted record shapes and their JSON field names.
//! - Provide the shared text normalization used by every add/edit command.
//!
//! # Invariants
//! - Every record carries an `id` unique within its collection.
//! - Serialized field names stay stable so existing stores remain readable.

pub mod drawing;
pub mod journal;
pub mod ledger;
pub mod prefs;
pub mod topic;

use uuid::Uuid;

/// Opaque record identifier. New ids are UUID v4 strings; stored ids of any
/// shape are accepted on read.
pub type RecordId = String;

/// Generates a fresh record id.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Trims user text, returning `None` when nothing but whitespace remains.
pub fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
