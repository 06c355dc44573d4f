//! API client errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single API call.
///
/// The variants are kept apart for logging; callers normally only care
/// whether the call succeeded, plus [`ApiError::detail`] for user-facing text.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// FastAPI-style `{"detail": "..."}` message, if the body carried one.
        detail: Option<String>,
        body: String,
    },

    /// The response body did not match the expected record.
    #[error("malformed response from {path}: {message}")]
    Decode { path: String, message: String },

    /// The request body could not be encoded.
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error, pulling `detail` out of a JSON body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("detail") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(other) if !other.is_null() => Some(other.to_string()),
                _ => None,
            });
        ApiError::Status {
            status,
            detail,
            body: body.to_string(),
        }
    }

    /// The server's `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401 responses (expired or rejected token).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_string_detail() {
        let err = ApiError::from_status(403, r#"{"detail":"Admin access required"}"#);
        assert_eq!(err.detail(), Some("Admin access required"));
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_from_status_structured_detail() {
        let err = ApiError::from_status(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert!(err.detail().unwrap().contains("field required"));
    }

    #[test]
    fn test_from_status_plain_body() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "server returned status 500");
    }

    #[test]
    fn test_transport_error_has_no_detail() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "request failed: Connection failed: refused");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::from_status(401, "{}").is_unauthorized());
        assert!(!ApiError::from_status(404, "{}").is_unauthorized());
    }
}
