#![allow(dead_code)]

//! Common test utilities for integration tests.
//!
//! ```ignore
//! let (mut app, http) = TestAppBuilder::new().logged_in().build().await;
//! http.set_response("GET", &url("/contacts"), MockResponse::json(200, json!([])));
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

// InMemorySessionStore, MockHttpClient, MockResponse come from `pub use mocks::*`.
use inbox_copilot::api::ApiClient;
use inbox_copilot::app::App;
use inbox_copilot::auth::{Session, SessionContext};

pub const BASE: &str = "http://api.test/api/v1";
pub const TEST_TOKEN: &str = "test-access-token-12345";

/// Absolute URL for an endpoint path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Builder for an [`App`] wired to mock adapters.
pub struct TestAppBuilder {
    store: InMemorySessionStore,
    http: MockHttpClient,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, serde_json::json!([])));
        Self {
            store: InMemorySessionStore::new(),
            http,
        }
    }

    /// Start with a stored session holding [`TEST_TOKEN`].
    pub fn logged_in(self) -> Self {
        self.store.set_session(Some(Session::with_token(TEST_TOKEN)));
        self
    }

    pub fn with_store(mut self, store: InMemorySessionStore) -> Self {
        self.store = store;
        self
    }

    /// Build the app, loading the session from the store.
    pub async fn build(self) -> (App, MockHttpClient) {
        let session = SessionContext::init(Arc::new(self.store))
            .await
            .expect("session init");
        let api = ApiClient::new(BASE, session, Arc::new(self.http.clone()));
        (App::new(api), self.http)
    }
}

/// Apply spawned results until `n` messages have been handled.
pub async fn drain(app: &mut App, n: usize) {
    for _ in 0..n {
        assert!(app.process_next_message().await, "message channel closed");
    }
}
