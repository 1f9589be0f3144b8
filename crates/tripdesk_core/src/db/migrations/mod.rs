//! Schema steps for the key-value table.
//!
//! The applied step is recorded in `PRAGMA user_version`; step `n` brings a
//! file from version `n - 1` to `n`.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Brings `conn` up to [`latest_version`] in a single transaction.
///
/// A file already past the latest version is rejected untouched.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(StoreError::SchemaTooNew { found, supported });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > found)
        .collect();
    let Some(last) = pending.last() else {
        return Ok(());
    };
    let target = last.version;

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        info!(
            "event=db_migrate module=db status=ok step={} version={}",
            step.name, step.version
        );
    }
    tx.pragma_update(None, "user_version", target)?;
    tx.commit()?;
    Ok(())
}

/// Schema version stored in the file; 0 for a fresh database.
pub fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
