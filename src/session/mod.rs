//! Login session and the gate in front of the repository.
//!
//! A session is remembered by writing `session.toml` next to the database.
//! Nothing in the store is touched by logging in or out; purging data on
//! logout is the caller's decision.

mod credentials;

pub use credentials::{
    Account, ConfiguredAccounts, CredentialValidator, DigestError, InvalidAccount, PasswordDigest,
};

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the remembered session inside the data directory.
pub const SESSION_FILE: &str = "session.toml";

// ===========================================
// Errors
// ===========================================

/// Credential check failures, with the messages users see.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password can't be empty!")]
    EmptyCredentials,

    #[error("Incorrect username or password!")]
    InvalidCredentials,
}

/// Errors from loading, saving, or checking a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("not logged in; run `notelist login <username>` first")]
    NotAuthenticated,

    #[error("failed to access session file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse session file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize session")]
    Serialize(#[from] toml::ser::Error),
}

impl SessionError {
    fn io(path: &Path, source: io::Error) -> Self {
        SessionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ===========================================
// SessionGate
// ===========================================

/// Read-only view of whether someone is logged in.
pub trait SessionGate {
    fn is_authenticated(&self) -> bool;

    fn current_user(&self) -> Option<&str>;
}

/// Returns the logged-in username, or `NotAuthenticated`.
pub fn require_authenticated(gate: &dyn SessionGate) -> Result<String, SessionError> {
    match gate.current_user() {
        Some(user) if gate.is_authenticated() => Ok(user.to_string()),
        _ => Err(SessionError::NotAuthenticated),
    }
}

// ===========================================
// Session
// ===========================================

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    username: String,
    remember: bool,
}

/// The login state backed by a session file.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    user: Option<String>,
    remember: bool,
}

impl Session {
    /// Loads the session stored at `path`.
    ///
    /// A missing file yields a logged-out session. A file whose `remember`
    /// flag is off is ignored.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let mut session = Self {
            path,
            user: None,
            remember: false,
        };

        let contents = match std::fs::read_to_string(&session.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(session),
            Err(e) => return Err(SessionError::io(&session.path, e)),
        };
        let stored: SessionFile =
            toml::from_str(&contents).map_err(|source| SessionError::Parse {
                path: session.path.clone(),
                source,
            })?;

        if stored.remember && !stored.username.trim().is_empty() {
            session.user = Some(stored.username);
            session.remember = true;
        }
        tracing::debug!(path = %session.path.display(), user = ?session.user, "loaded session");
        Ok(session)
    }

    /// Like [`Session::load`], but an unparsable session file is deleted and
    /// treated as logged out so a fresh login can replace it.
    pub fn load_or_reset(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        match Self::load(&path) {
            Err(SessionError::Parse { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "discarding unreadable session file");
                let session = Self {
                    path,
                    user: None,
                    remember: false,
                };
                session.remove_file()?;
                Ok(session)
            }
            other => other,
        }
    }

    /// Validates the credentials and logs the user in.
    ///
    /// With `remember` the session is written to disk; without it any
    /// previously remembered session is forgotten and the login lasts only
    /// as long as this value.
    pub fn login(
        &mut self,
        validator: &dyn CredentialValidator,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), SessionError> {
        validator.validate(username, password)?;

        let username = username.trim().to_string();
        if remember {
            self.save(&username)?;
        } else {
            self.remove_file()?;
        }
        tracing::info!(user = %username, remember, "logged in");
        self.user = Some(username);
        self.remember = remember;
        Ok(())
    }

    /// Logs out and forgets the remembered session.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.remove_file()?;
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user, "logged out");
        }
        self.remember = false;
        Ok(())
    }

    /// Whether the session survives this process.
    pub fn is_remembered(&self) -> bool {
        self.remember
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, username: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::io(parent, e))?;
        }
        let contents = toml::to_string_pretty(&SessionFile {
            username: username.to_string(),
            remember: true,
        })?;
        std::fs::write(&self.path, contents).map_err(|e| SessionError::io(&self.path, e))
    }

    fn remove_file(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::io(&self.path, e)),
        }
    }
}

impl SessionGate for Session {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
