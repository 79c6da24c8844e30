//! StoreOps implementations for SqliteStore and Transaction.

use super::ops;
use super::{SqliteStore, Transaction};
use crate::domain::{Folder, FolderId, Note, NoteId};
use crate::store::{FolderQuery, NoteQuery, StoreOps, StoreResult};

// ===========================================
// Inside an Open Transaction
// ===========================================

impl StoreOps for Transaction<'_> {
    fn insert_folder(&mut self, folder: &Folder) -> StoreResult<()> {
        ops::insert_folder(self.conn(), folder)
    }

    fn insert_note(&mut self, note: &Note) -> StoreResult<()> {
        ops::insert_note(self.conn(), note)
    }

    fn fetch_folders(&self, query: &FolderQuery) -> StoreResult<Vec<Folder>> {
        ops::fetch_folders(self.conn(), query)
    }

    fn fetch_notes(&self, query: &NoteQuery) -> StoreResult<Vec<Note>> {
        ops::fetch_notes(self.conn(), query)
    }

    fn fetch_folder_summaries(&self, query: &FolderQuery) -> StoreResult<Vec<(Folder, usize)>> {
        ops::fetch_folder_summaries(self.conn(), query)
    }

    fn update_folder(&mut self, folder: &Folder) -> StoreResult<()> {
        ops::update_folder(self.conn(), folder)
    }

    fn update_note(&mut self, note: &Note) -> StoreResult<()> {
        ops::update_note(self.conn(), note)
    }

    fn delete_folder(&mut self, id: &FolderId) -> StoreResult<usize> {
        ops::delete_folder(self.conn(), id)
    }

    fn delete_note(&mut self, id: &NoteId) -> StoreResult<()> {
        ops::delete_note(self.conn(), id)
    }

    fn count_notes(&self, folder_id: &FolderId) -> StoreResult<usize> {
        ops::count_notes(self.conn(), folder_id)
    }

    fn clear(&mut self) -> StoreResult<()> {
        ops::clear(self.conn())
    }
}

// ===========================================
// Autocommit: one transaction per mutating call
// ===========================================

impl SqliteStore {
    fn autocommit<T>(&mut self, op: impl FnOnce(&mut Transaction<'_>) -> StoreResult<T>) -> StoreResult<T> {
        let mut tx = self.transaction()?;
        let value = op(&mut tx)?;
        tx.commit()?;
        Ok(value)
    }
}

impl StoreOps for SqliteStore {
    fn insert_folder(&mut self, folder: &Folder) -> StoreResult<()> {
        self.autocommit(|tx| tx.insert_folder(folder))
    }

    fn insert_note(&mut self, note: &Note) -> StoreResult<()> {
        self.autocommit(|tx| tx.insert_note(note))
    }

    fn fetch_folders(&self, query: &FolderQuery) -> StoreResult<Vec<Folder>> {
        ops::fetch_folders(&self.conn, query)
    }

    fn fetch_notes(&self, query: &NoteQuery) -> StoreResult<Vec<Note>> {
        ops::fetch_notes(&self.conn, query)
    }

    fn fetch_folder_summaries(&self, query: &FolderQuery) -> StoreResult<Vec<(Folder, usize)>> {
        ops::fetch_folder_summaries(&self.conn, query)
    }

    fn update_folder(&mut self, folder: &Folder) -> StoreResult<()> {
        self.autocommit(|tx| tx.update_folder(folder))
    }

    fn update_note(&mut self, note: &Note) -> StoreResult<()> {
        self.autocommit(|tx| tx.update_note(note))
    }

    fn delete_folder(&mut self, id: &FolderId) -> StoreResult<usize> {
        self.autocommit(|tx| tx.delete_folder(id))
    }

    fn delete_note(&mut self, id: &NoteId) -> StoreResult<()> {
        self.autocommit(|tx| tx.delete_note(id))
    }

    fn count_notes(&self, folder_id: &FolderId) -> StoreResult<usize> {
        ops::count_notes(&self.conn, folder_id)
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.autocommit(|tx| tx.clear())
    }
}
