//! Durable storage for folders and notes.
//!
//! [`SqliteStore`] is the single source of truth. All access goes through the
//! [`StoreOps`] trait, implemented both by the store itself (every mutating
//! call commits on its own) and by an open [`Transaction`] (calls join the
//! transaction and become durable on `commit`).

mod query;
mod schema;
mod sqlite;

pub use query::{FolderQuery, NoteQuery};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::{SqliteStore, Transaction};

use crate::domain::{Folder, FolderId, Note, NoteId};
use rusqlite::ErrorCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// Error Types
// ===========================================

/// The two kinds of records the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Folder,
    Note,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Folder => write!(f, "folder"),
            EntityKind::Note => write!(f, "note"),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A write could not be persisted.
    #[error("write failed")]
    WriteFailed(#[source] rusqlite::Error),

    /// A unique key already exists (schema-level safety net).
    #[error("{kind} already exists: {key}")]
    DuplicateKey { kind: EntityKind, key: String },

    /// A read or schema statement failed.
    #[error("database error")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// An I/O error occurred while preparing the database location.
    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Classifies a failed write.
    ///
    /// Unique-key violations become `DuplicateKey`; everything else is `WriteFailed`.
    pub(crate) fn from_write(kind: EntityKind, key: &str, err: rusqlite::Error) -> Self {
        match err.sqlite_error() {
            Some(e)
                if e.code == ErrorCode::ConstraintViolation
                    && (e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                        || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY) =>
            {
                StoreError::DuplicateKey {
                    kind,
                    key: key.to_string(),
                }
            }
            _ => StoreError::WriteFailed(err),
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// StoreOps Trait
// ===========================================

/// Record-level operations on the store.
///
/// Results of `fetch_*` are always in insertion order.
pub trait StoreOps {
    /// Persists a new folder.
    fn insert_folder(&mut self, folder: &Folder) -> StoreResult<()>;

    /// Persists a new note. Fails with `NotFound` if its folder is unknown.
    fn insert_note(&mut self, note: &Note) -> StoreResult<()>;

    /// Returns all folders matching the query.
    fn fetch_folders(&self, query: &FolderQuery) -> StoreResult<Vec<Folder>>;

    /// Returns all notes matching the query.
    fn fetch_notes(&self, query: &NoteQuery) -> StoreResult<Vec<Note>>;

    /// Returns the folders matching the query, each with its note count.
    fn fetch_folder_summaries(&self, query: &FolderQuery) -> StoreResult<Vec<(Folder, usize)>>;

    /// Persists the name of an existing folder.
    fn update_folder(&mut self, folder: &Folder) -> StoreResult<()>;

    /// Persists title, description and modified time of an existing note.
    fn update_note(&mut self, note: &Note) -> StoreResult<()>;

    /// Removes a folder and all of its notes.
    ///
    /// Returns the number of notes removed with it.
    fn delete_folder(&mut self, id: &FolderId) -> StoreResult<usize>;

    /// Removes a single note.
    fn delete_note(&mut self, id: &NoteId) -> StoreResult<()>;

    /// Counts the notes owned by a folder.
    fn count_notes(&self, folder_id: &FolderId) -> StoreResult<usize>;

    /// Removes every folder and note.
    fn clear(&mut self) -> StoreResult<()>;

    /// Fetches a single folder by id.
    fn get_folder(&self, id: &FolderId) -> StoreResult<Folder> {
        self.fetch_folders(&FolderQuery::by_id(id))?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::not_found(EntityKind::Folder, id))
    }

    /// Fetches a single note by id.
    fn get_note(&self, id: &NoteId) -> StoreResult<Note> {
        self.fetch_notes(&NoteQuery::by_id(id))?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::not_found(EntityKind::Note, id))
    }
}
