//! Folder: a named container that owns notes.

use crate::domain::FolderId;
use crate::domain::validation::{ValidationError, is_blank, name_key};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named container of notes.
///
/// A folder owns its notes through the `folder_id` field on [`Note`](crate::domain::Note);
/// the folder itself carries no collection. Names are stored exactly as given
/// and compared case-insensitively, ignoring surrounding whitespace, via
/// [`Folder::name_key`].
///
/// # Examples
///
/// ```
/// use notelist::domain::Folder;
///
/// let folder = Folder::new("  Work ").unwrap();
/// assert_eq!(folder.name(), "  Work ");
/// assert_eq!(folder.name_key(), "work");
/// assert!(Folder::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    id: FolderId,
    name: String,
    created: DateTime<Utc>,
}

impl Folder {
    /// Creates a folder with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace-only.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: FolderId::new(),
            name: validate_name(name)?,
            created: Utc::now(),
        })
    }

    /// Rebuilds a folder from stored values without validation.
    pub fn from_parts(id: FolderId, name: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created,
        }
    }

    /// Returns a copy of this folder carrying a new name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace-only.
    pub fn renamed(&self, new_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: self.id,
            name: validate_name(new_name)?,
            created: self.created,
        })
    }

    pub fn id(&self) -> &FolderId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Case-folded name used for uniqueness checks.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

/// Returns the name unchanged if it is a legal folder name.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}
