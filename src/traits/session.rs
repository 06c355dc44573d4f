//! Session store trait abstraction.
//!
//! Persists the bearer token between runs. The in-process owner of the token
//! is [`crate::auth::SessionContext`]; a store only backs it.

use async_trait::async_trait;

use crate::auth::Session;
use crate::error::SessionError;

/// Trait for session persistence.
///
/// # Example
///
/// ```ignore
/// use inbox_copilot::traits::SessionStore;
///
/// async fn has_saved_login<S: SessionStore>(store: &S) -> bool {
///     matches!(store.load().await, Ok(Some(session)) if session.has_token())
/// }
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if a session with a token is stored
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if reading failed
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Persist a session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), SessionError>;
}
