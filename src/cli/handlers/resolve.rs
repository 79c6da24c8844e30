//! Folder and note resolution from command-line identifiers.

use anyhow::{Result, bail};

use crate::domain::{Folder, Note};
use crate::repository::Repository;

/// Result of resolving an identifier.
#[derive(Debug)]
pub enum ResolveResult<T> {
    /// Exactly one record matched.
    Unique(T),
    /// Multiple records matched (ambiguous).
    Ambiguous(Vec<T>),
    /// Nothing matched.
    NotFound,
}

impl<T> ResolveResult<T> {
    fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => ResolveResult::NotFound,
            1 => ResolveResult::Unique(matches.remove(0)),
            _ => ResolveResult::Ambiguous(matches),
        }
    }
}

/// Resolves a folder identifier.
///
/// Resolution order:
/// 1. Exact name match, ignoring case
/// 2. ID prefix match
pub fn resolve_folder(repo: &Repository, identifier: &str) -> Result<ResolveResult<Folder>> {
    let identifier = identifier.trim();

    if let Some(folder) = repo.find_folder_by_name(identifier)? {
        return Ok(ResolveResult::Unique(folder));
    }

    Ok(ResolveResult::from_matches(
        repo.find_folders_by_id_prefix(identifier)?,
    ))
}

/// Resolves a note identifier by ID or ID prefix.
pub fn resolve_note(repo: &Repository, identifier: &str) -> Result<ResolveResult<Note>> {
    Ok(ResolveResult::from_matches(
        repo.find_notes_by_id_prefix(identifier)?,
    ))
}

/// Resolves a folder or fails with a message naming the candidates.
pub(crate) fn require_folder(repo: &Repository, identifier: &str) -> Result<Folder> {
    match resolve_folder(repo, identifier)? {
        ResolveResult::Unique(folder) => Ok(folder),
        ResolveResult::Ambiguous(folders) => {
            eprintln!(
                "Ambiguous: '{}' matches {} folders:",
                identifier,
                folders.len()
            );
            for folder in &folders {
                eprintln!("  {} - {}", folder.id().prefix(), folder.name());
            }
            bail!("ambiguous folder: {}", identifier)
        }
        ResolveResult::NotFound => bail!("folder not found: {}", identifier),
    }
}

/// Resolves a note or fails with a message naming the candidates.
pub(crate) fn require_note(repo: &Repository, identifier: &str) -> Result<Note> {
    match resolve_note(repo, identifier)? {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => {
            eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
            for note in &notes {
                eprintln!("  {} - {}", note.id().prefix(), note.title());
            }
            eprintln!();
            eprintln!("Use a longer ID prefix to specify which note you mean.");
            bail!("ambiguous note: {}", identifier)
        }
        ResolveResult::NotFound => bail!("note not found: {}", identifier),
    }
}
