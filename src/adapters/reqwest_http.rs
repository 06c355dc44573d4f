//! Production transport over reqwest.

use async_trait::async_trait;
use reqwest::Method;
use tracing::trace;

use crate::traits::{Headers, HttpClient, HttpError, Response};

const USER_AGENT: &str = concat!("inbox-copilot/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// No timeouts are set; a slow chat reply is waited out.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }

    async fn exchange(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        trace!("{} {}", method, url);
        let mut request = self.client.request(method, url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        let reply = request.send().await.map_err(classify)?;
        let status = reply.status().as_u16();
        let body = reply.bytes().await.map_err(classify)?;
        Ok(Response::new(status, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Io(message)
    } else {
        HttpError::Other(message)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.exchange(Method::GET, url, None, headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.exchange(Method::POST, url, Some(body), headers).await
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers)
        -> Result<Response, HttpError> {
        self.exchange(Method::PATCH, url, Some(body), headers).await
    }
}
