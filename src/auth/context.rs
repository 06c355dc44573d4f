//! The shared session context.
//!
//! [`SessionContext`] is the single owner of the bearer token for the
//! lifetime of the process. The API client reads it on every request and the
//! navigation gate checks it on every protected mount. It is written once at
//! login ([`SessionContext::establish`]) and cleared at logout
//! ([`SessionContext::teardown`]).

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::auth::Session;
use crate::error::SessionError;
use crate::traits::SessionStore;

/// Cloneable handle to the current session.
#[derive(Clone)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    /// Create an empty context backed by `store`. Nothing is loaded.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Create a context and load any stored token from `store`.
    pub async fn init(store: Arc<dyn SessionStore>) -> Result<Self, SessionError> {
        let context = Self::new(store);
        if let Some(session) = context.store.load().await? {
            if session.has_token() {
                context.set_token(session.access_token);
                tracing::info!("Restored stored session");
            }
        }
        Ok(context)
    }

    /// Current bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// True when a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Adopt a freshly issued token and persist it.
    ///
    /// The token is usable immediately even if persisting fails; the error
    /// only means the next run will start logged out.
    pub async fn establish(&self, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        self.set_token(Some(token.clone()));
        self.store.save(&Session::with_token(token)).await
    }

    /// Drop the in-memory token without touching the store.
    pub fn forget(&self) {
        self.set_token(None);
    }

    /// Drop the token and remove it from the store.
    pub async fn teardown(&self) -> Result<(), SessionError> {
        self.forget();
        self.store.clear().await
    }

    fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStore, StoreOp};

    #[tokio::test]
    async fn test_init_from_empty_store() {
        let store = Arc::new(InMemorySessionStore::new());
        let context = SessionContext::init(store).await.unwrap();
        assert!(!context.is_authenticated());
        assert_eq!(context.token(), None);
    }

    #[tokio::test]
    async fn test_init_restores_token() {
        let store = Arc::new(InMemorySessionStore::with_session(Session::with_token("saved")));
        let context = SessionContext::init(store).await.unwrap();
        assert_eq!(context.token().as_deref(), Some("saved"));
    }

    #[tokio::test]
    async fn test_init_propagates_load_failure() {
        let store = InMemorySessionStore::new();
        store.fail(StoreOp::Load);
        assert!(SessionContext::init(Arc::new(store)).await.is_err());
    }

    #[tokio::test]
    async fn test_establish_persists() {
        let store = Arc::new(InMemorySessionStore::new());
        let context = SessionContext::new(store.clone());

        context.establish("fresh").await.unwrap();

        assert_eq!(context.token().as_deref(), Some("fresh"));
        assert_eq!(
            store.get_session().and_then(|s| s.access_token).as_deref(),
            Some("fresh")
        );
    }

    #[tokio::test]
    async fn test_establish_keeps_token_when_save_fails() {
        let store = InMemorySessionStore::new();
        store.fail(StoreOp::Save);
        let context = SessionContext::new(Arc::new(store));

        assert!(context.establish("fresh").await.is_err());
        assert!(context.is_authenticated());
    }

    #[tokio::test]
    async fn test_teardown_clears_memory_and_store() {
        let store = Arc::new(InMemorySessionStore::with_session(Session::with_token("t")));
        let context = SessionContext::init(store.clone()).await.unwrap();

        context.teardown().await.unwrap();

        assert!(!context.is_authenticated());
        assert!(store.get_session().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_token() {
        let context = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        let other = context.clone();

        context.establish("shared").await.unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));

        other.forget();
        assert!(!context.is_authenticated());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let context = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        context.set_token(Some("secret-token".to_string()));
        let printed = format!("{:?}", context);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("authenticated: true"));
    }
}
