//! Connection management for SqliteStore.

use super::SqliteStore;
use super::transaction::Transaction;
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl SqliteStore {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the store schema.
    ///
    /// Nothing survives the store being dropped; meant for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates the database at the given path.
    ///
    /// Creates parent directories if they don't exist and initializes the
    /// schema on first use.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened store");
        Self::init(conn)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        // Commits must reach disk before a call returns
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = FULL;
             PRAGMA foreign_keys = ON;",
        )?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a write transaction.
    ///
    /// The write lock is taken immediately, so reads made inside the
    /// transaction cannot be invalidated by another writer before commit.
    /// The transaction rolls back on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        Transaction::begin(&self.conn)
    }
}
