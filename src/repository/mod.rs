//! Repository: the validated CRUD and query service over the store.
//!
//! Every operation revalidates the records it is handed against the store,
//! so a stale `Folder` or `Note` value yields `UnknownFolder` / `NotFound`
//! instead of acting on data that no longer exists. Writes run their
//! validation reads and the write itself inside one transaction.


use crate::domain::{Folder, FolderId, Note, NoteId, ValidationError, validate_name};
use crate::store::{EntityKind, FolderQuery, NoteQuery, SqliteStore, StoreError, StoreOps};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

// ===========================================
// DomainError Type
// ===========================================

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A folder name was blank.
    #[error("folder name can't be empty")]
    EmptyName,

    /// A note title or description was blank.
    #[error("{field} can't be empty")]
    EmptyField { field: &'static str },

    /// Another folder already uses this name (ignoring case).
    #[error("folder name already exists: {name}")]
    DuplicateName { name: String },

    /// The folder a call referred to no longer exists.
    #[error("folder not found: {id}")]
    UnknownFolder { id: FolderId },

    /// The store failed or the record was not found.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Returns true when the referenced record no longer exists.
    ///
    /// Callers should refresh their view of the data rather than retry.
    pub fn is_not_found(&self) -> bool {
        match self {
            DomainError::UnknownFolder { .. } => true,
            DomainError::Store(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => DomainError::EmptyName,
            ValidationError::EmptyField { field } => DomainError::EmptyField { field },
        }
    }
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, DomainError>;

// ===========================================
// FolderSummary Type
// ===========================================

/// A folder together with the number of notes it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSummary {
    #[serde(flatten)]
    pub folder: Folder,
    pub note_count: usize,
}

// ===========================================
// Repository
// ===========================================

/// The only entry point the presentation layer calls.
///
/// Construct one explicitly and pass it by reference; there is no shared
/// global instance.
#[derive(Debug)]
pub struct Repository {
    store: SqliteStore,
}

impl Repository {
    /// Wraps an already-open store.
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Opens (or creates) the store at `path`.
    pub fn open(path: &Path) -> RepoResult<Self> {
        Ok(Self::new(SqliteStore::open(path)?))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(SqliteStore::open_in_memory()?))
    }

    /// Returns the underlying store for read-only inspection.
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    // ===========================================
    // Folders
    // ===========================================

    /// Creates a folder.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is blank
    /// - `DuplicateName` if a folder with the same name (ignoring case) exists
    pub fn create_folder(&mut self, name: &str) -> RepoResult<Folder> {
        let folder = Folder::new(name)?;

        let mut tx = self.store.transaction()?;
        ensure_name_available(&tx, folder.name(), None)?;
        tx.insert_folder(&folder)
            .map_err(|e| duplicate_name(e, folder.name()))?;
        tx.commit()?;

        tracing::info!(id = %folder.id(), name = folder.name(), "created folder");
        Ok(folder)
    }

    /// Renames a folder.
    ///
    /// The folder may keep its own name with different casing.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if `new_name` is blank
    /// - `DuplicateName` if another folder already uses the name
    /// - `Store(NotFound)` if the folder no longer exists
    pub fn rename_folder(&mut self, folder: &Folder, new_name: &str) -> RepoResult<Folder> {
        let new_name = validate_name(new_name)?;

        let mut tx = self.store.transaction()?;
        let current = tx.get_folder(folder.id())?;
        ensure_name_available(&tx, &new_name, Some(current.id()))?;
        let renamed = current.renamed(&new_name)?;
        tx.update_folder(&renamed)
            .map_err(|e| duplicate_name(e, renamed.name()))?;
        tx.commit()?;

        tracing::info!(
            id = %renamed.id(),
            from = current.name(),
            to = renamed.name(),
            "renamed folder"
        );
        Ok(renamed)
    }

    /// Deletes a folder and, in the same transaction, all of its notes.
    ///
    /// Returns the number of notes removed.
    ///
    /// # Errors
    ///
    /// `Store(NotFound)` if the folder no longer exists.
    pub fn delete_folder(&mut self, folder: &Folder) -> RepoResult<usize> {
        let removed = self.store.delete_folder(folder.id())?;
        tracing::info!(id = %folder.id(), notes = removed, "deleted folder");
        Ok(removed)
    }

    /// Lists folders whose name contains `filter` (ignoring case).
    ///
    /// `None` or an empty filter returns every folder. Insertion order is kept.
    pub fn list_folders(&self, filter: Option<&str>) -> RepoResult<Vec<Folder>> {
        let query = FolderQuery::all().name_contains(filter.unwrap_or_default());
        Ok(self.store.fetch_folders(&query)?)
    }

    /// Like [`list_folders`](Self::list_folders), with each folder's note count.
    pub fn list_folder_summaries(&self, filter: Option<&str>) -> RepoResult<Vec<FolderSummary>> {
        let query = FolderQuery::all().name_contains(filter.unwrap_or_default());
        Ok(self
            .store
            .fetch_folder_summaries(&query)?
            .into_iter()
            .map(|(folder, note_count)| FolderSummary { folder, note_count })
            .collect())
    }

    /// Fetches a folder by id.
    pub fn get_folder(&self, id: &FolderId) -> RepoResult<Folder> {
        Ok(self.store.get_folder(id)?)
    }

    /// Finds the folder with exactly this name, ignoring case.
    pub fn find_folder_by_name(&self, name: &str) -> RepoResult<Option<Folder>> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let query = FolderQuery::all().name_is(name);
        Ok(self.store.fetch_folders(&query)?.into_iter().next())
    }

    // ===========================================
    // Notes
    // ===========================================

    /// Creates a note in `folder`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title or description is blank
    /// - `UnknownFolder` if the folder no longer exists
    pub fn create_note(
        &mut self,
        title: &str,
        description: &str,
        folder: &Folder,
    ) -> RepoResult<Note> {
        let note = Note::new(title, description, folder.id())?;

        let mut tx = self.store.transaction()?;
        tx.get_folder(folder.id()).map_err(|e| unknown_folder(e, folder.id()))?;
        tx.insert_note(&note)
            .map_err(|e| unknown_folder(e, folder.id()))?;
        tx.commit()?;

        tracing::info!(id = %note.id(), folder = %folder.id(), "created note");
        Ok(note)
    }

    /// Replaces a note's title and description.
    ///
    /// The owning folder never changes.
    ///
    /// # Errors
    ///
    /// - `EmptyField` on blank input
    /// - `Store(NotFound)` if the note no longer exists
    pub fn update_note(&mut self, note: &Note, title: &str, description: &str) -> RepoResult<Note> {
        // Validate before touching the store
        note.edited(title, description)?;

        let mut tx = self.store.transaction()?;
        let current = tx.get_note(note.id())?;
        let edited = current.edited(title, description)?;
        tx.update_note(&edited)?;
        tx.commit()?;

        tracing::info!(id = %edited.id(), "updated note");
        Ok(edited)
    }

    /// Deletes a single note.
    ///
    /// # Errors
    ///
    /// `Store(NotFound)` if the note no longer exists.
    pub fn delete_note(&mut self, note: &Note) -> RepoResult<()> {
        self.store.delete_note(note.id())?;
        tracing::info!(id = %note.id(), "deleted note");
        Ok(())
    }

    /// Lists the notes of `folder` whose title contains `filter` (ignoring case).
    ///
    /// # Errors
    ///
    /// `UnknownFolder` if the folder no longer exists.
    pub fn list_notes(&self, folder: &Folder, filter: Option<&str>) -> RepoResult<Vec<Note>> {
        self.store
            .get_folder(folder.id())
            .map_err(|e| unknown_folder(e, folder.id()))?;
        let query = NoteQuery::in_folder(folder.id()).title_contains(filter.unwrap_or_default());
        Ok(self.store.fetch_notes(&query)?)
    }

    /// Fetches a note by id.
    pub fn get_note(&self, id: &NoteId) -> RepoResult<Note> {
        Ok(self.store.get_note(id)?)
    }

    /// Finds notes whose id starts with `prefix` (ignoring case).
    pub fn find_notes_by_id_prefix(&self, prefix: &str) -> RepoResult<Vec<Note>> {
        let prefix = prefix.trim().to_ascii_uppercase();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .store
            .fetch_notes(&NoteQuery::all())?
            .into_iter()
            .filter(|n| n.id().to_string().starts_with(&prefix))
            .collect())
    }

    /// Finds folders whose id starts with `prefix` (ignoring case).
    pub fn find_folders_by_id_prefix(&self, prefix: &str) -> RepoResult<Vec<Folder>> {
        let prefix = prefix.trim().to_ascii_uppercase();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .store
            .fetch_folders(&FolderQuery::all())?
            .into_iter()
            .filter(|f| f.id().to_string().starts_with(&prefix))
            .collect())
    }

    // ===========================================
    // Maintenance
    // ===========================================

    /// Deletes every folder and note in one transaction.
    pub fn clear_all(&mut self) -> RepoResult<()> {
        self.store.clear()?;
        tracing::info!("cleared all folders and notes");
        Ok(())
    }
}

// ===========================================
// Helpers
// ===========================================

fn ensure_name_available(
    store: &impl StoreOps,
    name: &str,
    except: Option<&FolderId>,
) -> RepoResult<()> {
    let taken = store
        .fetch_folders(&FolderQuery::all().name_is(name))?
        .iter()
        .any(|f| Some(f.id()) != except);
    if taken {
        tracing::debug!(name, "folder name already taken");
        return Err(DomainError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn duplicate_name(err: StoreError, name: &str) -> DomainError {
    match err {
        StoreError::DuplicateKey {
            kind: EntityKind::Folder,
            ..
        } => DomainError::DuplicateName {
            name: name.to_string(),
        },
        other => DomainError::Store(other),
    }
}

fn unknown_folder(err: StoreError, id: &FolderId) -> DomainError {
    match err {
        StoreError::NotFound {
            kind: EntityKind::Folder,
            ..
        } => DomainError::UnknownFolder { id: *id },
        other => DomainError::Store(other),
    }
}
