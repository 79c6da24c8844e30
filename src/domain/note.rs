//! Note: a titled text record owned by exactly one folder.

use crate::domain::validation::{ValidationError, is_blank, require_field};
use crate::domain::{FolderId, NoteId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A titled text record belonging to exactly one folder.
///
/// The owning folder is fixed at creation; there is no operation that moves
/// a note. Title and description are stored exactly as given.
///
/// # Examples
///
/// ```
/// use notelist::domain::{Folder, Note};
///
/// let folder = Folder::new("Work").unwrap();
/// let note = Note::new(" Standup ", "Notes from today", folder.id()).unwrap();
/// assert_eq!(note.title(), " Standup ");
/// assert_eq!(note.folder_id(), folder.id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    folder_id: FolderId,
    title: String,
    description: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh identifier in the given folder.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the title or description is
    /// empty or whitespace-only.
    pub fn new(
        title: &str,
        description: &str,
        folder_id: &FolderId,
    ) -> Result<Self, ValidationError> {
        let (title, description) = validate_fields(title, description)?;
        let now = Utc::now();
        Ok(Self {
            id: NoteId::new(),
            folder_id: *folder_id,
            title,
            description,
            created: now,
            modified: now,
        })
    }

    /// Rebuilds a note from stored values without validation.
    pub fn from_parts(
        id: NoteId,
        folder_id: FolderId,
        title: impl Into<String>,
        description: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            folder_id,
            title: title.into(),
            description: description.into(),
            created,
            modified,
        }
    }

    /// Returns a copy with new title and description and a bumped `modified`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` on blank input.
    pub fn edited(&self, title: &str, description: &str) -> Result<Self, ValidationError> {
        let (title, description) = validate_fields(title, description)?;
        Ok(Self {
            id: self.id,
            folder_id: self.folder_id,
            title,
            description,
            created: self.created,
            modified: Utc::now().max(self.modified),
        })
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn folder_id(&self) -> &FolderId {
        &self.folder_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

fn validate_fields(title: &str, description: &str) -> Result<(String, String), ValidationError> {
    let title = require_field(title, "title")?;
    if is_blank(description) {
        return Err(ValidationError::EmptyField {
            field: "description",
        });
    }
    Ok((title, description.to_string()))
}
