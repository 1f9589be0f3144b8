//! SQLite backing file for the key-value store.
//!
//! Opening a connection creates the `kv_entries` table on first use and
//! refuses files written by a newer TripDesk schema. Failures surface as
//! [`StoreError`](crate::store::StoreError) so callers see one storage error
//! type whichever backend they use.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
