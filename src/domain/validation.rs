//! Input validation shared by folders, notes and the store's filters

use thiserror::Error;

/// A field failed a non-empty check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A folder name was empty or whitespace-only.
    #[error("folder name can't be empty")]
    EmptyName,

    /// A note field was empty or whitespace-only.
    #[error("{field} can't be empty")]
    EmptyField { field: &'static str },
}

/// Returns true if the string is empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Case-folded comparison key for a folder name.
///
/// Two names collide when their keys are equal.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Rejects a blank `value`; anything else is returned unchanged.
pub(crate) fn require_field(value: &str, field: &'static str) -> Result<String, ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}
