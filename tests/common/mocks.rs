//! Fixture payloads shaped like the service's JSON.

pub use inbox_copilot::adapters::mock::{
    InMemorySessionStore, MockHttpClient, MockResponse, RecordedRequest,
};
pub use inbox_copilot::traits::{Headers, HttpClient, HttpError, Response};

use serde_json::{json, Value};

pub fn task_json(id: i64, title: &str, status: &str, overdue: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "task_type": "FOLLOW_UP",
        "priority": "MEDIUM",
        "status": status,
        "due_date": "2024-05-20T10:00:00",
        "overdue": overdue,
        "created_at": "2024-05-01T09:00:00Z"
    })
}

pub fn contact_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("contact{}@example.com", id),
        "pipeline_stage": "NEW_LEAD",
        "created_at": "2024-05-01T09:00:00Z"
    })
}

pub fn token_json(token: &str) -> Value {
    json!({"access_token": token, "token_type": "bearer"})
}

pub fn bearer(request: &RecordedRequest) -> Option<&str> {
    request.headers.get("Authorization").map(String::as_str)
}
