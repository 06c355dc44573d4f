//! Chat side-panel state.
//!
//! The panel has three observable states:
//!
//! ```text
//!   Closed ──open/toggle──▶ OpenIdle ──submit(non-empty)──▶ OpenPending
//!     ▲                        │  ▲                              │
//!     └──────close/toggle──────┘  └────────resolve(result)───────┘
//! ```
//!
//! The user turn is appended on submit, before the request is sent, so the
//! transcript is ordered by submission time. Only one request is in flight:
//! a submit while pending is rejected and the typed input is kept.

use tracing::warn;

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse};

/// Assistant turn appended when a chat request fails.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error.";
/// Shown in an empty transcript.
pub const EMPTY_HINT: &str = "Ask me anything about your tasks, contacts, or emails.";
/// Shown while a reply is pending.
pub const PENDING_LABEL: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    OpenIdle,
    OpenPending,
}

/// Result of [`ChatPanel::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A user turn was appended; send this request.
    Sent(ChatRequest),
    /// Input was empty or whitespace only. Nothing happened.
    Empty,
    /// A reply is still pending. Input kept.
    Busy,
    /// The panel is closed.
    Closed,
}

#[derive(Debug, Default)]
pub struct ChatPanel {
    open: bool,
    pending: bool,
    transcript: Vec<Turn>,
    input: String,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        match (self.open, self.pending) {
            (false, _) => PanelState::Closed,
            (true, false) => PanelState::OpenIdle,
            (true, true) => PanelState::OpenPending,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a request is in flight, even if the panel was closed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the panel. An in-flight request is not cancelled.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current input.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.open {
            return SubmitOutcome::Closed;
        }
        if self.input.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.pending {
            return SubmitOutcome::Busy;
        }

        let text = std::mem::take(&mut self.input);
        self.transcript.push(Turn::user(text.clone()));
        self.pending = true;
        SubmitOutcome::Sent(ChatRequest { message: text })
    }

    /// Apply the outcome of the pending request.
    ///
    /// Returns false when nothing was pending.
    pub fn resolve(&mut self, result: Result<ChatResponse, ApiError>) -> bool {
        if !self.pending {
            warn!("Chat reply arrived with no request pending; dropped");
            return false;
        }
        let reply = match result {
            Ok(response) => response.reply,
            Err(e) => {
                warn!("Chat request failed: {}", e);
                ERROR_REPLY.to_string()
            }
        };
        self.transcript.push(Turn::assistant(reply));
        self.pending = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> Result<ChatResponse, ApiError> {
        Ok(ChatResponse {
            reply: text.to_string(),
            structured: None,
        })
    }

    fn typed(panel: &mut ChatPanel, text: &str) {
        panel.set_input(text);
    }

    #[test]
    fn test_initial_state_closed() {
        let panel = ChatPanel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(panel.transcript().is_empty());
    }

    #[test]
    fn test_toggle_open_close() {
        let mut panel = ChatPanel::new();
        panel.toggle();
        assert_eq!(panel.state(), PanelState::OpenIdle);
        panel.toggle();
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn test_submit_appends_user_turn_immediately() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, "  any overdue tasks? ");

        let outcome = panel.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Sent(ChatRequest {
                message: "  any overdue tasks? ".to_string()
            })
        );
        assert_eq!(panel.transcript(), &[Turn::user("  any overdue tasks? ")]);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.state(), PanelState::OpenPending);
    }

    #[test]
    fn test_resolve_success_appends_reply() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, "hi");
        panel.submit();

        assert!(panel.resolve(reply("Hello!")));

        assert_eq!(panel.transcript(), &[Turn::user("hi"), Turn::assistant("Hello!")]);
        assert_eq!(panel.state(), PanelState::OpenIdle);
    }

    #[test]
    fn test_resolve_failure_appends_fixed_text() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, "hi");
        panel.submit();

        panel.resolve(Err(ApiError::from_status(500, "")));

        assert_eq!(panel.transcript()[1], Turn::assistant(ERROR_REPLY));
    }

    #[test]
    fn test_whitespace_submit_is_noop() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, " \t\n ");

        assert_eq!(panel.submit(), SubmitOutcome::Empty);
        assert!(panel.transcript().is_empty());
        assert_eq!(panel.state(), PanelState::OpenIdle);
    }

    #[test]
    fn test_submit_while_pending_is_rejected() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, "first");
        panel.submit();
        typed(&mut panel, "second");

        assert_eq!(panel.submit(), SubmitOutcome::Busy);
        assert_eq!(panel.input(), "second");
        assert_eq!(panel.transcript().len(), 1);

        panel.resolve(reply("one"));
        assert!(matches!(panel.submit(), SubmitOutcome::Sent(_)));
        panel.resolve(reply("two"));

        let roles: Vec<Role> = panel.transcript().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn test_close_while_pending_reply_still_lands() {
        let mut panel = ChatPanel::new();
        panel.open();
        typed(&mut panel, "hi");
        panel.submit();
        panel.close();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(panel.is_pending());

        panel.resolve(reply("late"));

        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_pending());
        assert_eq!(panel.transcript().len(), 2);

        panel.open();
        assert_eq!(panel.state(), PanelState::OpenIdle);
    }

    #[test]
    fn test_submit_when_closed() {
        let mut panel = ChatPanel::new();
        typed(&mut panel, "hi");
        assert_eq!(panel.submit(), SubmitOutcome::Closed);
        assert!(panel.transcript().is_empty());
    }

    #[test]
    fn test_resolve_without_pending_is_ignored() {
        let mut panel = ChatPanel::new();
        assert!(!panel.resolve(reply("stray")));
        assert!(panel.transcript().is_empty());
    }

    #[test]
    fn test_input_editing() {
        let mut panel = ChatPanel::new();
        panel.push_char('o');
        panel.push_char('k');
        panel.backspace();
        assert_eq!(panel.input(), "o");
    }
}
