//! Persisted login session.
//!
//! The token and the logged-in user survive between runs so that a shop
//! terminal does not have to log in for every command.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write as _};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt as _, PermissionsExt as _};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use pos_types::{AuthResponse, Role, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Cannot write session file {path}: {error}")]
    Write { path: String, error: String },

    #[error("Cannot remove session file {path}: {error}")]
    Remove { path: String, error: String },

    #[error("Cannot encode session: {0}")]
    Encode(String),
}

/// Bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Where the current session lives.
pub trait SessionStore: Send + Sync {
    /// Current session, if any.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Forget the session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session kept as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, error: impl ToString) -> SessionError {
        SessionError::Write {
            path: self.path.display().to_string(),
            error: error.to_string(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cannot read session file");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                if let Err(e) = self.clear() {
                    warn!(error = %e, "Cannot remove corrupt session file");
                }
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        let text = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Encode(e.to_string()))?;

        // The token grants access to the shop's books: owner-only from creation.
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.path).map_err(|e| self.write_error(e))?;

        // `mode` only applies to new files.
        #[cfg(unix)]
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|e| self.write_error(e))?;

        file.write_all(text.as_bytes())
            .map_err(|e| self.write_error(e))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Remove {
                path: self.path.display().to_string(),
                error: e.to_string(),
            }),
        }
    }
}

/// Session held in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.inner.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.inner.write() = None;
        Ok(())
    }
}
