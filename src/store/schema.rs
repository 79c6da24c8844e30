//! SQLite schema creation for the folder/note store.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema.
///
/// Idempotent: calling it on an initialized database is a no-op.
///
/// # Tables Created
/// - `folders` - Folder records; `name_key` holds the case-folded name
/// - `notes` - Note records; `folder_id` cascades on folder delete
/// - `schema_version` - Schema version tracking
///
/// `seq` columns give every table a stable insertion order.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS folders (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL,
            created TEXT NOT NULL
        );",
    )?;

    // Safety net behind the repository's duplicate-name check
    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_folders_name_key ON folders(name_key);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            folder_id TEXT NOT NULL REFERENCES folders(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            title_key TEXT NOT NULL,
            description TEXT NOT NULL,
            created TEXT NOT NULL,
            modified TEXT NOT NULL
        );",
    )?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_notes_folder ON notes(folder_id, seq);")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
