//! AppMessage enum for async communication within the application.

use crate::error::{ApiError, SessionError};
use crate::models::{
    ChatResponse, Contact, EmailThread, ResetDemoResponse, SyncResponse, Task, User,
};
use crate::pages::{CommandOutcome, DashboardStats, TaskFilter};

/// Completions of spawned network work, applied on the UI task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Dashboard contacts and open tasks fetched
    DashboardLoaded(Result<DashboardStats, ApiError>),
    /// Email sync request finished
    SyncFinished(Result<SyncResponse, ApiError>),
    /// Today's agenda fetched
    TodayLoaded(Result<Vec<Task>, ApiError>),
    /// Completion of an agenda task, with the reloaded agenda
    TodayTaskCompleted(CommandOutcome<Vec<Task>>),
    /// Task list fetched for a filter
    TasksLoaded {
        filter: TaskFilter,
        result: Result<Vec<Task>, ApiError>,
    },
    /// Completion from the task list, reloaded for `filter`
    TasksTaskCompleted {
        filter: TaskFilter,
        outcome: CommandOutcome<Vec<Task>>,
    },
    ContactsLoaded(Result<Vec<Contact>, ApiError>),
    ThreadsLoaded(Result<Vec<EmailThread>, ApiError>),
    /// One thread with its messages
    ThreadLoaded {
        id: i64,
        result: Result<EmailThread, ApiError>,
    },
    /// All tasks for the calendar grid
    CalendarLoaded(Result<Vec<Task>, ApiError>),
    UserLoaded(Result<User, ApiError>),
    ResetFinished(Result<ResetDemoResponse, ApiError>),
    /// Login round-trip finished; on success the session holds the token
    LoginFinished(Result<(), ApiError>),
    ChatReplied(Result<ChatResponse, ApiError>),
    /// Stored session removed after logout
    LoggedOut(Result<(), SessionError>),
}

impl AppMessage {
    /// Messages that stay meaningful after a logout. The chat transcript is
    /// kept across sessions, and the store teardown is spawned by the logout.
    pub fn outlives_session(&self) -> bool {
        matches!(self, AppMessage::ChatReplied(_) | AppMessage::LoggedOut(_))
    }
}

/// A message tagged with the session epoch that spawned its work.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub epoch: u64,
    pub message: AppMessage,
}
