//! Session record and file storage.
//!
//! The session lives in `~/.inbox-copilot/session.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SessionError;

/// The data directory name.
pub const DATA_DIR: &str = ".inbox-copilot";

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

/// A stored login.
///
/// Only the bearer token is kept; the user profile is always fetched from
/// `/auth/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Bearer token returned by `/auth/login`.
    pub access_token: Option<String>,
    /// Token type reported by the server (normally `bearer`).
    #[serde(default)]
    pub token_type: Option<String>,
}

impl Session {
    /// Create a session holding a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            token_type: Some("bearer".to_string()),
        }
    }

    /// Check if the session has a non-empty access token.
    pub fn has_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Default location of the session file, or `None` without a home directory.
pub fn default_session_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR).join(SESSION_FILE))
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionFileManager {
    session_path: PathBuf,
}

impl SessionFileManager {
    /// Manager for the default path under the home directory.
    pub fn new() -> Result<Self, SessionError> {
        default_session_path()
            .map(Self::with_path)
            .ok_or(SessionError::NoHomeDirectory)
    }

    /// Manager for an explicit path.
    pub fn with_path(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
        }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Load the session. A missing file yields an empty session.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.session_path.exists() {
            return Ok(Session::default());
        }

        let file = File::open(&self.session_path)
            .map_err(|e| SessionError::LoadFailed(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SessionError::Serialization(e.to_string()))
    }

    /// Save the session, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SessionError::SaveFailed(e.to_string()))?;
            }
        }

        let file = File::create(&self.session_path)
            .map_err(|e| SessionError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| SessionError::SaveFailed(e.to_string()))
    }

    /// Remove the session file. Succeeds if it does not exist.
    pub fn clear(&self) -> Result<(), SessionError> {
        if !self.session_path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.session_path).map_err(|e| SessionError::ClearFailed(e.to_string()))
    }
}
