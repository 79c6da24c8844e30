//! Command handlers for the CLI.

mod folders;
mod notes;
mod resolve;
mod session;


use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::repository::Repository;
use crate::session::{SESSION_FILE, Session, require_authenticated};

// Re-export public items
pub use folders::handle_folder;
pub use notes::handle_note;
pub use resolve::{ResolveResult, resolve_folder, resolve_note};
pub use session::{handle_completions, handle_login, handle_logout, handle_whoami};

/// File name of the database inside the data directory.
pub const DB_FILE: &str = "notelist.db";

// ===========================================
// Shared Utilities
// ===========================================

/// Returns the database path for a data directory.
pub(crate) fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}

/// Returns the session file path for a data directory.
pub(crate) fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE)
}

/// Loads the session stored in the data directory.
pub(crate) fn load_session(data_dir: &Path) -> Result<Session> {
    Ok(Session::load(session_path(data_dir))?)
}

/// Loads the session for login and logout, discarding an unreadable file.
pub(crate) fn load_session_or_reset(data_dir: &Path) -> Result<Session> {
    Ok(Session::load_or_reset(session_path(data_dir))?)
}

/// Checks the session, then opens the repository.
///
/// Every handler that reads or writes folders and notes goes through here.
pub(crate) fn open_repository(data_dir: &Path) -> Result<Repository> {
    let session = load_session(data_dir)?;
    let user = require_authenticated(&session)?;

    let path = db_path(data_dir);
    tracing::debug!(user = %user, db = %path.display(), "opening repository");
    Repository::open(&path).with_context(|| format!("failed to open database at {}", path.display()))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
