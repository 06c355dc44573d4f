//! Authenticated REST client.
//!
//! [`ApiClient`] joins relative paths to the configured base URL, attaches
//! `Authorization: Bearer <token>` whenever the session holds a token, and
//! turns every outcome into either a parsed record or an [`ApiError`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::SessionContext;
use crate::error::ApiError;
use crate::traits::{Headers, HttpClient, Response};

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// Client for the Inbox Copilot REST API.
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionContext,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Absolute URL for a relative path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Add Authorization header with Bearer token when logged in.
    fn headers(&self, content_type: Option<&str>) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), JSON.to_string());
        if let Some(content_type) = content_type {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }
        if let Some(token) = self.session.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// `GET path` and parse the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.http.get(&url, &self.headers(None)).await?;
        decode(path, "GET", response)
    }

    /// `POST path` with an optional JSON body.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = match body {
            Some(body) => {
                let encoded = encode(body)?;
                self.http.post(&url, &encoded, &self.headers(Some(JSON))).await?
            }
            None => self.http.post(&url, "", &self.headers(None)).await?,
        };
        decode(path, "POST", response)
    }

    /// `PATCH path` with a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PATCH {}", url);
        let encoded = encode(body)?;
        let response = self
            .http
            .patch(&url, &encoded, &self.headers(Some(JSON)))
            .await?;
        decode(path, "PATCH", response)
    }

    /// `POST path` with a url-encoded form body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("POST {} (form)", url);
        let body = fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        let response = self.http.post(&url, &body, &self.headers(Some(FORM))).await?;
        decode(path, "POST", response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(path: &str, method: &str, response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        debug!("{} {} -> {}", method, path, response.status);
        return Err(ApiError::from_status(response.status, &body));
    }
    response.json::<T>().map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}
