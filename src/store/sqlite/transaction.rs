//! RAII-based transaction support for SQLite.

use crate::store::{StoreError, StoreResult};
use rusqlite::Connection;

/// A write transaction with RAII-based automatic rollback.
///
/// The transaction will automatically rollback when dropped unless
/// `commit()` is called explicitly.
pub struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    /// Starts an immediate transaction on the connection.
    pub(crate) fn begin(conn: &'a Connection) -> StoreResult<Self> {
        conn.execute_batch("BEGIN IMMEDIATE")
            .map_err(StoreError::WriteFailed)?;
        tracing::trace!("transaction started");
        Ok(Self {
            conn,
            finished: false,
        })
    }

    /// Returns a reference to the underlying connection.
    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Commits the transaction.
    ///
    /// Consumes the transaction, preventing automatic rollback on drop.
    pub fn commit(mut self) -> StoreResult<()> {
        self.conn
            .execute_batch("COMMIT")
            .map_err(StoreError::WriteFailed)?;
        self.finished = true;
        tracing::trace!("transaction committed");
        Ok(())
    }

    /// Rolls back the transaction explicitly.
    ///
    /// Equivalent to dropping without commit, but makes the intent explicit.
    pub fn rollback(mut self) -> StoreResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        self.finished = true;
        tracing::trace!("transaction rolled back");
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Attempt rollback, but ignore errors since we're in drop
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
