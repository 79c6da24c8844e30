//! SQL statements shared by the autocommit store and open transactions.

use crate::domain::{Folder, FolderId, Note, NoteId};
use crate::store::{EntityKind, FolderQuery, NoteQuery, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, ErrorCode, params, params_from_iter};

// ===========================================
// Row Decoding
// ===========================================

fn parse_timestamp(value: &str, column: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid {} timestamp '{}': {}", column, value, e)))
}

fn parse_folder_id(value: &str) -> StoreResult<FolderId> {
    value
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("invalid folder id: {}", e)))
}

fn parse_note_id(value: &str) -> StoreResult<NoteId> {
    value
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("invalid note id: {}", e)))
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    err.sqlite_error().is_some_and(|e| {
        e.code == ErrorCode::ConstraintViolation
            && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    })
}

// ===========================================
// Folders
// ===========================================

pub(super) fn insert_folder(conn: &Connection, folder: &Folder) -> StoreResult<()> {
    let key = folder.name_key();
    conn.execute(
        "INSERT INTO folders (id, name, name_key, created) VALUES (?1, ?2, ?3, ?4)",
        params![
            folder.id().to_string(),
            folder.name(),
            key,
            folder.created().to_rfc3339(),
        ],
    )
    .map_err(|e| StoreError::from_write(EntityKind::Folder, &key, e))?;
    tracing::debug!(id = %folder.id(), name = folder.name(), "inserted folder");
    Ok(())
}

fn folder_from_row(id: &str, name: String, created: &str) -> StoreResult<Folder> {
    Ok(Folder::from_parts(
        parse_folder_id(id)?,
        name,
        parse_timestamp(created, "created")?,
    ))
}

pub(super) fn fetch_folders(conn: &Connection, query: &FolderQuery) -> StoreResult<Vec<Folder>> {
    let (filter, args) = query.to_sql();
    let sql = format!("SELECT id, name, created FROM folders{} ORDER BY seq", filter);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, name, created)| folder_from_row(&id, name, &created))
        .collect()
}

/// Folders matching the query with their note counts, in one statement.
pub(super) fn fetch_folder_summaries(
    conn: &Connection,
    query: &FolderQuery,
) -> StoreResult<Vec<(Folder, usize)>> {
    let (filter, args) = query.to_sql();
    let sql = format!(
        "SELECT id, name, created,
                (SELECT COUNT(*) FROM notes WHERE notes.folder_id = folders.id)
         FROM folders{} ORDER BY seq",
        filter
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, name, created, count)| -> StoreResult<(Folder, usize)> {
            let count = usize::try_from(count)
                .map_err(|_| StoreError::Corrupt(format!("negative note count for folder {}", id)))?;
            Ok((folder_from_row(&id, name, &created)?, count))
        })
        .collect()
}

pub(super) fn update_folder(conn: &Connection, folder: &Folder) -> StoreResult<()> {
    let key = folder.name_key();
    let rows = conn
        .execute(
            "UPDATE folders SET name = ?1, name_key = ?2 WHERE id = ?3",
            params![folder.name(), key, folder.id().to_string()],
        )
        .map_err(|e| StoreError::from_write(EntityKind::Folder, &key, e))?;
    if rows == 0 {
        return Err(StoreError::not_found(EntityKind::Folder, folder.id()));
    }
    tracing::debug!(id = %folder.id(), name = folder.name(), "updated folder");
    Ok(())
}

/// Deletes the folder's notes, then the folder, on the caller's transaction.
pub(super) fn delete_folder(conn: &Connection, id: &FolderId) -> StoreResult<usize> {
    let id_str = id.to_string();
    let notes = conn
        .execute("DELETE FROM notes WHERE folder_id = ?1", [&id_str])
        .map_err(StoreError::WriteFailed)?;
    let rows = conn
        .execute("DELETE FROM folders WHERE id = ?1", [&id_str])
        .map_err(StoreError::WriteFailed)?;
    if rows == 0 {
        return Err(StoreError::not_found(EntityKind::Folder, id));
    }
    tracing::debug!(id = %id, notes, "deleted folder");
    Ok(notes)
}

// ===========================================
// Notes
// ===========================================

pub(super) fn insert_note(conn: &Connection, note: &Note) -> StoreResult<()> {
    let id_str = note.id().to_string();
    conn.execute(
        "INSERT INTO notes (id, folder_id, title, title_key, description, created, modified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id_str,
            note.folder_id().to_string(),
            note.title(),
            note.title().to_lowercase(),
            note.description(),
            note.created().to_rfc3339(),
            note.modified().to_rfc3339(),
        ],
    )
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            StoreError::not_found(EntityKind::Folder, note.folder_id())
        } else {
            StoreError::from_write(EntityKind::Note, &id_str, e)
        }
    })?;
    tracing::debug!(id = %note.id(), folder = %note.folder_id(), "inserted note");
    Ok(())
}

pub(super) fn fetch_notes(conn: &Connection, query: &NoteQuery) -> StoreResult<Vec<Note>> {
    let (filter, args) = query.to_sql();
    let sql = format!(
        "SELECT id, folder_id, title, description, created, modified FROM notes{} ORDER BY seq",
        filter
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, folder_id, title, description, created, modified)| -> StoreResult<Note> {
            Ok(Note::from_parts(
                parse_note_id(&id)?,
                parse_folder_id(&folder_id)?,
                title,
                description,
                parse_timestamp(&created, "created")?,
                parse_timestamp(&modified, "modified")?,
            ))
        })
        .collect()
}

pub(super) fn update_note(conn: &Connection, note: &Note) -> StoreResult<()> {
    let id_str = note.id().to_string();
    let rows = conn
        .execute(
            "UPDATE notes SET title = ?1, title_key = ?2, description = ?3, modified = ?4
             WHERE id = ?5",
            params![
                note.title(),
                note.title().to_lowercase(),
                note.description(),
                note.modified().to_rfc3339(),
                id_str,
            ],
        )
        .map_err(|e| StoreError::from_write(EntityKind::Note, &id_str, e))?;
    if rows == 0 {
        return Err(StoreError::not_found(EntityKind::Note, note.id()));
    }
    tracing::debug!(id = %note.id(), "updated note");
    Ok(())
}

pub(super) fn delete_note(conn: &Connection, id: &NoteId) -> StoreResult<()> {
    let rows = conn
        .execute("DELETE FROM notes WHERE id = ?1", [id.to_string()])
        .map_err(StoreError::WriteFailed)?;
    if rows == 0 {
        return Err(StoreError::not_found(EntityKind::Note, id));
    }
    tracing::debug!(id = %id, "deleted note");
    Ok(())
}

pub(super) fn count_notes(conn: &Connection, folder_id: &FolderId) -> StoreResult<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM notes WHERE folder_id = ?1",
        [folder_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

pub(super) fn clear(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch("DELETE FROM notes; DELETE FROM folders;")
        .map_err(StoreError::WriteFailed)?;
    tracing::debug!("cleared store");
    Ok(())
}
