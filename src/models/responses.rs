//! Request and response bodies of the action endpoints.

use serde::{Deserialize, Serialize};

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Per-entity counts removed by a demo reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeletedCounts {
    #[serde(default)]
    pub contacts: u64,
    #[serde(default)]
    pub email_threads: u64,
    #[serde(default)]
    pub email_messages: u64,
    #[serde(default)]
    pub tasks: u64,
    #[serde(default)]
    pub embeddings: u64,
}

impl DeletedCounts {
    /// Banner text shown after a successful reset.
    pub fn summary(&self) -> String {
        format!(
            "Deleted: {} contacts, {} threads, {} messages, {} tasks, {} embeddings.",
            self.contacts, self.email_threads, self.email_messages, self.tasks, self.embeddings
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PreservedCounts {
    #[serde(default)]
    pub users: u64,
}

/// Response from `POST /admin/reset-demo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetDemoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub deleted: DeletedCounts,
    #[serde(default)]
    pub preserved: PreservedCounts,
    #[serde(default)]
    pub note: Option<String>,
}

/// Response from `POST /sync/emails`.
///
/// The server currently only acknowledges that a background sync started;
/// `count` is read when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl SyncResponse {
    /// Notice shown on the dashboard after a successful sync.
    pub fn notice(&self) -> String {
        match self.count.filter(|c| *c > 0) {
            Some(count) => format!("Sync complete! Loaded {} emails.", count),
            None => "Sync complete! Loaded some emails.".to_string(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Response from `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub structured: Option<serde_json::Value>,
}
