//! Predicates for `fetch_folders` / `fetch_notes`.
//!
//! Only field equality and case-insensitive substring filters are supported.
//! Every set field narrows the result (AND).

use crate::domain::{FolderId, NoteId, name_key};

/// Filter over folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderQuery {
    pub(crate) id: Option<FolderId>,
    pub(crate) name_key: Option<String>,
    pub(crate) name_contains: Option<String>,
}

impl FolderQuery {
    /// Matches every folder.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the folder with this id.
    pub fn by_id(id: &FolderId) -> Self {
        Self {
            id: Some(*id),
            ..Self::default()
        }
    }

    /// Restricts to folders whose name equals `name`, ignoring case.
    pub fn name_is(mut self, name: &str) -> Self {
        self.name_key = Some(name_key(name));
        self
    }

    /// Restricts to folders whose name contains `text`, ignoring case.
    ///
    /// An empty `text` leaves the query unchanged.
    pub fn name_contains(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.name_contains = Some(text.to_lowercase());
        }
        self
    }

    /// Builds the WHERE clause and its positional parameters.
    pub(crate) fn to_sql(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        if let Some(id) = &self.id {
            clauses.push("id = ?");
            params.push(id.to_string());
        }
        if let Some(key) = &self.name_key {
            clauses.push("name_key = ?");
            params.push(key.clone());
        }
        if let Some(text) = &self.name_contains {
            clauses.push("instr(name_key, ?) > 0");
            params.push(text.clone());
        }
        (where_clause(&clauses), params)
    }
}

/// Filter over notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub(crate) id: Option<NoteId>,
    pub(crate) folder_id: Option<FolderId>,
    pub(crate) title_contains: Option<String>,
}

impl NoteQuery {
    /// Matches every note.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the note with this id.
    pub fn by_id(id: &NoteId) -> Self {
        Self {
            id: Some(*id),
            ..Self::default()
        }
    }

    /// Matches the notes owned by a folder.
    pub fn in_folder(folder_id: &FolderId) -> Self {
        Self {
            folder_id: Some(*folder_id),
            ..Self::default()
        }
    }

    /// Restricts to notes whose title contains `text`, ignoring case.
    ///
    /// An empty `text` leaves the query unchanged.
    pub fn title_contains(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.title_contains = Some(text.to_lowercase());
        }
        self
    }

    pub(crate) fn to_sql(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        if let Some(id) = &self.id {
            clauses.push("id = ?");
            params.push(id.to_string());
        }
        if let Some(folder_id) = &self.folder_id {
            clauses.push("folder_id = ?");
            params.push(folder_id.to_string());
        }
        if let Some(text) = &self.title_contains {
            clauses.push("instr(title_key, ?) > 0");
            params.push(text.clone());
        }
        (where_clause(&clauses), params)
    }
}

fn where_clause(clauses: &[&str]) -> String {
    if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_has_no_where_clause() {
        let (sql, params) = FolderQuery::all().to_sql();
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn empty_filter_text_is_ignored() {
        assert_eq!(FolderQuery::all().name_contains(""), FolderQuery::all());
        assert_eq!(NoteQuery::all().title_contains(""), NoteQuery::all());
    }

    #[test]
    fn name_filters_are_lowercased() {
        let (sql, params) = FolderQuery::all().name_is(" Work ").name_contains("DoC").to_sql();
        assert_eq!(sql, " WHERE name_key = ? AND instr(name_key, ?) > 0");
        assert_eq!(params, vec!["work".to_string(), "doc".to_string()]);
    }

    #[test]
    fn note_query_combines_folder_and_title() {
        let folder: FolderId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let (sql, params) = NoteQuery::in_folder(&folder).title_contains("Plan").to_sql();
        assert_eq!(sql, " WHERE folder_id = ? AND instr(title_key, ?) > 0");
        assert_eq!(params, vec![folder.to_string(), "plan".to_string()]);
    }
}
