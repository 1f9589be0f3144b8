use rusqlite::Connection;
use tripdesk_core::db::migrations::{current_user_version, latest_version};
use tripdesk_core::db::{open_db, open_db_in_memory};
use tripdesk_core::{SqliteStore, StoreError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn reopening_a_store_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tripdesk.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO kv_entries (key, value) VALUES ('theme', '\"dark\"');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(current_user_version(&second).unwrap(), latest_version());
    let value: String = second
        .query_row("SELECT value FROM kv_entries WHERE key = 'theme';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "\"dark\"");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        StoreError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        SqliteStore::open(&path),
        Err(StoreError::SchemaTooNew { found: 999, .. })
    ));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), 999);
}

#[test]
fn fresh_file_starts_at_version_zero() {
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), 0);
    assert_eq!(latest_version(), 1);
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
