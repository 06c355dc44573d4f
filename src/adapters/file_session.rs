//! File-based session store adapter.

use async_trait::async_trait;
use std::path::Path;

use crate::auth::{Session, SessionFileManager};
use crate::error::SessionError;
use crate::traits::SessionStore;

/// Session store backed by [`SessionFileManager`].
///
/// File IO is small and synchronous; it runs inline on the caller's task.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    manager: SessionFileManager,
}

impl FileSessionStore {
    /// Store at the default path (`~/.inbox-copilot/session.json`).
    pub fn new() -> Result<Self, SessionError> {
        SessionFileManager::new().map(|manager| Self { manager })
    }

    /// Store at an explicit path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            manager: SessionFileManager::with_path(path.as_ref()),
        }
    }

    /// Path of the session file.
    pub fn session_path(&self) -> &Path {
        self.manager.session_path()
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        let session = self.manager.load()?;
        Ok(session.has_token().then_some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.manager.save(session)
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.manager.clear()
    }
}
