use tracing::warn;

use crate::error::ApiError;
use crate::models::Task;

use super::{CommandOutcome, ListCursor};

pub const EMPTY_TEXT: &str = "No tasks for today!";

/// Today's agenda: overdue tasks plus tasks due today.
#[derive(Debug, Default)]
pub struct TodayPage {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub cursor: ListCursor,
    /// Task whose completion is in flight
    pub completing: Option<i64>,
}

impl TodayPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_tasks(&mut self, result: Result<Vec<Task>, ApiError>) {
        self.loading = false;
        match result {
            Ok(tasks) => self.replace(tasks),
            Err(e) => warn!("Failed to fetch today's agenda: {}", e),
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.cursor
            .selected(self.tasks.len())
            .and_then(|i| self.tasks.get(i))
    }

    /// Id of the selected task if it can be completed now.
    pub fn begin_complete(&mut self) -> Option<i64> {
        if self.completing.is_some() {
            return None;
        }
        let id = self.selected_task().filter(|t| !t.is_done())?.id;
        self.completing = Some(id);
        Some(id)
    }

    pub fn apply_complete(&mut self, outcome: CommandOutcome<Vec<Task>>) {
        self.completing = None;
        match outcome {
            CommandOutcome::Reloaded(tasks) => self.replace(tasks),
            CommandOutcome::MutationFailed(e) => warn!("Failed to complete task: {}", e),
            CommandOutcome::ReloadFailed(e) => {
                warn!("Task completed but agenda reload failed: {}", e)
            }
        }
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.cursor.clamp(self.tasks.len());
    }
}
