//! In-memory session store for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::Session;
use crate::error::SessionError;
use crate::traits::SessionStore;

/// A [`SessionStore`] operation that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Load,
    Save,
    Clear,
}

#[derive(Debug, Default)]
struct Slot {
    session: Option<Session>,
    failing: HashSet<StoreOp>,
}

/// Keeps the session in memory. Clones share the slot, so a test can hold
/// one handle while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<Mutex<Slot>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set_session(Some(session));
        store
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every later `op` return an error.
    pub fn fail(&self, op: StoreOp) {
        self.slot().failing.insert(op);
    }

    pub fn get_session(&self) -> Option<Session> {
        self.slot().session.clone()
    }

    pub fn set_session(&self, session: Option<Session>) {
        self.slot().session = session;
    }

    fn check(&self, op: StoreOp) -> Result<(), SessionError> {
        if !self.slot().failing.contains(&op) {
            return Ok(());
        }
        let reason = format!("{:?} disabled in test store", op);
        Err(match op {
            StoreOp::Load => SessionError::LoadFailed(reason),
            StoreOp::Save => SessionError::SaveFailed(reason),
            StoreOp::Clear => SessionError::ClearFailed(reason),
        })
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        self.check(StoreOp::Load)?;
        Ok(self.get_session())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.check(StoreOp::Save)?;
        self.set_session(Some(session.clone()));
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.check(StoreOp::Clear)?;
        self.set_session(None);
        Ok(())
    }
}
