//! Core types: Folder, Note and their ULID identifiers

mod folder;
mod id;
mod note;
mod validation;

pub use folder::{Folder, validate_name};
pub use id::{FolderId, NoteId, PREFIX_LEN, ParseIdError};
pub use note::Note;
pub use validation::{ValidationError, is_blank, name_key};
