//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Folder, Note};
use crate::repository::FolderSummary;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single folder in listing output.
#[derive(Debug, Serialize)]
pub struct FolderListing {
    pub id: String,
    pub name: String,
    pub created: String,
    pub note_count: usize,
}

impl From<&FolderSummary> for FolderListing {
    fn from(summary: &FolderSummary) -> Self {
        let folder: &Folder = &summary.folder;
        Self {
            id: folder.id().to_string(),
            name: folder.name().to_string(),
            created: folder.created().to_rfc3339(),
            note_count: summary.note_count,
        }
    }
}

/// A single note in listing and show output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub folder_id: String,
    pub title: String,
    pub description: String,
    pub created: String,
    pub modified: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().to_string(),
            folder_id: note.folder_id().to_string(),
            title: note.title().to_string(),
            description: note.description().to_string(),
            created: note.created().to_rfc3339(),
            modified: note.modified().to_rfc3339(),
        }
    }
}
