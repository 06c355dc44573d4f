use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::deserialize_optional_timestamp;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Open,
    WaitingOnClient,
    Done,
    Canceled,
    /// A status this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Wire value, as used in the `?status=` query.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::WaitingOnClient => "WAITING_ON_CLIENT",
            TaskStatus::Done => "DONE",
            TaskStatus::Canceled => "CANCELED",
            TaskStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::WaitingOnClient => "Waiting",
            TaskStatus::Done => "Done",
            TaskStatus::Canceled => "Canceled",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Unknown => "?",
        }
    }
}

/// Kind of work a task represents, as classified by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    FollowUp,
    SendDocuments,
    ScheduleShowing,
    PrepareComparables,
    SubmitOffer,
    ReviewOffer,
    ContractTask,
    AnswerClientQuestion,
    RequestInformation,
    #[default]
    GeneralTodo,
    #[serde(other)]
    Unknown,
}

impl TaskType {
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::FollowUp => "Follow up",
            TaskType::SendDocuments => "Send documents",
            TaskType::ScheduleShowing => "Schedule showing",
            TaskType::PrepareComparables => "Prepare comparables",
            TaskType::SubmitOffer => "Submit offer",
            TaskType::ReviewOffer => "Review offer",
            TaskType::ContractTask => "Contract",
            TaskType::AnswerClientQuestion => "Answer question",
            TaskType::RequestInformation => "Request information",
            TaskType::GeneralTodo => "To-do",
            TaskType::Unknown => "Task",
        }
    }
}

/// A task from `/tasks` or `/agenda/today`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub contact_id: Option<i64>,
    #[serde(default)]
    pub source_thread_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Computed by the server: due in the past and not done.
    #[serde(default)]
    pub overdue: bool,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Body of `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskUpdate {
    pub status: TaskStatus,
}
