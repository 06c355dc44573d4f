//! Typed endpoint methods.

use crate::error::ApiError;
use crate::models::{
    ChatRequest, ChatResponse, Contact, EmailThread, ResetDemoResponse, SyncResponse, Task,
    TaskStatus, TaskUpdate, TokenResponse, User,
};

use super::ApiClient;

impl ApiClient {
    /// `GET /tasks`, optionally filtered by status.
    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, ApiError> {
        match status {
            Some(status) => self.get(&format!("/tasks?status={}", status.as_str())).await,
            None => self.get("/tasks").await,
        }
    }

    /// `PATCH /tasks/{id}` with the new status.
    pub async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<Task, ApiError> {
        self.patch(&format!("/tasks/{}", id), &TaskUpdate { status })
            .await
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get("/contacts").await
    }

    pub async fn list_threads(&self) -> Result<Vec<EmailThread>, ApiError> {
        self.get("/email-threads").await
    }

    /// One thread including its messages.
    pub async fn get_thread(&self, id: i64) -> Result<EmailThread, ApiError> {
        self.get(&format!("/email-threads/{}", id)).await
    }

    /// Overdue tasks plus tasks due today.
    pub async fn today_agenda(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/agenda/today").await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    /// Exchange credentials for a token. Does not touch the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_form(
            "/auth/login",
            &[("username", username), ("password", password)],
        )
        .await
    }

    /// Wipe the demo data set (admin only).
    pub async fn reset_demo(&self) -> Result<ResetDemoResponse, ApiError> {
        self.post::<(), _>("/admin/reset-demo", None).await
    }

    pub async fn sync_emails(&self) -> Result<SyncResponse, ApiError> {
        self.post::<(), _>("/sync/emails", None).await
    }

    /// Send one chat turn. The text is sent exactly as typed.
    pub async fn chat(&self, text: &str) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            message: text.to_string(),
        };
        self.post("/chat", Some(&request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStore, MockHttpClient, MockResponse};
    use crate::auth::SessionContext;
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "http://api.test/api/v1";

    fn client() -> (ApiClient, MockHttpClient) {
        let http = MockHttpClient::new();
        let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        (ApiClient::new(BASE, session, Arc::new(http.clone())), http)
    }

    #[tokio::test]
    async fn test_list_tasks_status_query() {
        let (api, http) = client();
        http.set_response(
            "GET",
            &format!("{}/tasks?status=WAITING_ON_CLIENT", BASE),
            MockResponse::json(200, json!([{"id": 1, "title": "Call back", "status": "WAITING_ON_CLIENT"}])),
        );

        let tasks = api.list_tasks(Some(TaskStatus::WaitingOnClient)).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::WaitingOnClient);
    }

    #[tokio::test]
    async fn test_list_tasks_unfiltered_path() {
        let (api, http) = client();
        http.set_default_response(MockResponse::json(200, json!([])));

        api.list_tasks(None).await.unwrap();
        assert_eq!(http.get_requests()[0].url, format!("{}/tasks", BASE));
    }

    #[tokio::test]
    async fn test_update_task_status_body() {
        let (api, http) = client();
        http.set_default_response(MockResponse::json(200, json!({"id": 9, "title": "x", "status": "DONE"})));

        let task = api.update_task_status(9, TaskStatus::Done).await.unwrap();

        assert!(task.is_done());
        let request = &http.requests_for("PATCH")[0];
        assert_eq!(request.url, format!("{}/tasks/9", BASE));
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"status": "DONE"}));
    }

    #[tokio::test]
    async fn test_chat_sends_untrimmed_text() {
        let (api, http) = client();
        http.set_default_response(MockResponse::json(200, json!({"reply": "You have 3 tasks."})));

        let reply = api.chat("  what's due?\n").await.unwrap();

        assert_eq!(reply.reply, "You have 3 tasks.");
        let body: serde_json::Value =
            serde_json::from_str(http.get_requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["message"], "  what's due?\n");
    }

    #[tokio::test]
    async fn test_get_thread_path() {
        let (api, http) = client();
        http.set_default_response(MockResponse::json(200, json!({"id": 4, "subject": "Hi", "messages": []})));

        let thread = api.get_thread(4).await.unwrap();
        assert_eq!(thread.id, 4);
        assert_eq!(http.get_requests()[0].url, format!("{}/email-threads/4", BASE));
    }
}
