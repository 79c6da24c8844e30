//! SQLite-backed store implementation.

mod connection;
mod ops;
mod store_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed folder and note store.
///
/// Owns the database connection. Construct one per data directory and pass it
/// (or the [`Repository`](crate::repository::Repository) wrapping it) to
/// whatever needs it.
#[derive(Debug)]
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
