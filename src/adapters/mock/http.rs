//! Scripted transport for tests.
//!
//! Responses are keyed by method and absolute URL. Several responses can be
//! queued for one route; they are served in order and the last one sticks,
//! which is how refetch-after-mutate flows are scripted.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// `None` for GET
    pub body: Option<String>,
}

/// What a scripted route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, including errors the API client must decode
    Success(Response),
    /// The exchange fails before a status is seen
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_value(status, &value))
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<(String, String), VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

impl Script {
    fn answer(&mut self, method: &str, url: &str) -> Result<Response, HttpError> {
        let queued = self
            .routes
            .get_mut(&(method.to_string(), url.to_string()))
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });
        match queued.or_else(|| self.fallback.clone()) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no scripted response for {} {}", method, url))),
        }
    }
}

/// Recording [`HttpClient`]. Clones share one script and one request log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("GET", "http://api/contacts", MockResponse::json(200, json!([])));
/// let api = ApiClient::new("http://api", session, Arc::new(http.clone()));
/// api.list_contacts().await?;
/// assert_eq!(http.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn route(method: &str, url: &str) -> (String, String) {
        (method.to_ascii_uppercase(), url.to_string())
    }

    /// Answer every `method url` request with `response`.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        self.script()
            .routes
            .insert(Self::route(method, url), VecDeque::from([response]));
    }

    /// Queue `response` after those already scripted for the route.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        self.script()
            .routes
            .entry(Self::route(method, url))
            .or_default()
            .push_back(response);
    }

    /// Answer for routes with nothing scripted.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().log.clone()
    }

    pub fn requests_for(&self, method: &str) -> Vec<RecordedRequest> {
        self.script()
            .log
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case(method))
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.script().log.clear();
    }

    fn handle(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        let mut script = self.script();
        script.log.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });
        script.answer(method, url)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body))
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers)
        -> Result<Response, HttpError> {
        self.handle("PATCH", url, headers, Some(body))
    }
}
