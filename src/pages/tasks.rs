use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{Task, TaskStatus};

use super::{CommandOutcome, ListCursor};

pub const EMPTY_TEXT: &str = "No tasks found.";

/// Status filter of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    Open,
    Completed,
    Waiting,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::Open, TaskFilter::Completed, TaskFilter::Waiting];

    pub fn status(&self) -> TaskStatus {
        match self {
            TaskFilter::Open => TaskStatus::Open,
            TaskFilter::Completed => TaskStatus::Done,
            TaskFilter::Waiting => TaskStatus::WaitingOnClient,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::Open => "Open",
            TaskFilter::Completed => "Completed",
            TaskFilter::Waiting => "Waiting",
        }
    }

    pub fn next(&self) -> TaskFilter {
        match self {
            TaskFilter::Open => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::Waiting,
            TaskFilter::Waiting => TaskFilter::Open,
        }
    }
}

/// All tasks, filtered by status.
#[derive(Debug, Default)]
pub struct TasksPage {
    pub filter: TaskFilter,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub cursor: ListCursor,
    pub completing: Option<i64>,
}

impl TasksPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Select the next filter. The caller refetches for the returned filter.
    pub fn cycle_filter(&mut self) -> TaskFilter {
        self.filter = self.filter.next();
        self.cursor.reset();
        self.loading = true;
        self.filter
    }

    /// Apply a fetch for `filter`. Returns false if the result was stale.
    pub fn apply_tasks(&mut self, filter: TaskFilter, result: Result<Vec<Task>, ApiError>) -> bool {
        if filter != self.filter {
            debug!("Dropping task list for stale filter {:?}", filter);
            return false;
        }
        self.loading = false;
        match result {
            Ok(tasks) => self.replace(tasks),
            Err(e) => warn!("Failed to fetch tasks: {}", e),
        }
        true
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.cursor
            .selected(self.tasks.len())
            .and_then(|i| self.tasks.get(i))
    }

    /// Id of the selected task if it can be completed now. Done tasks
    /// cannot be completed again.
    pub fn begin_complete(&mut self) -> Option<i64> {
        if self.completing.is_some() {
            return None;
        }
        let id = self.selected_task().filter(|t| !t.is_done())?.id;
        self.completing = Some(id);
        Some(id)
    }

    /// Apply a completion whose reload ran for `filter`.
    pub fn apply_complete(&mut self, filter: TaskFilter, outcome: CommandOutcome<Vec<Task>>) {
        self.completing = None;
        match outcome {
            CommandOutcome::Reloaded(tasks) if filter == self.filter => self.replace(tasks),
            CommandOutcome::Reloaded(_) => {
                debug!("Dropping reload for stale filter {:?}", filter)
            }
            CommandOutcome::MutationFailed(e) => warn!("Failed to complete task: {}", e),
            CommandOutcome::ReloadFailed(e) => {
                warn!("Task completed but task list reload failed: {}", e)
            }
        }
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.cursor.clamp(self.tasks.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, status: &str) -> Task {
        serde_json::from_value(serde_json::json!({"id": id, "title": "t", "status": status}))
            .unwrap()
    }

    #[test]
    fn test_filter_cycle() {
        let mut page = TasksPage::new();
        assert_eq!(page.filter, TaskFilter::Open);
        assert_eq!(page.cycle_filter(), TaskFilter::Completed);
        assert_eq!(page.cycle_filter(), TaskFilter::Waiting);
        assert_eq!(page.cycle_filter(), TaskFilter::Open);
        assert_eq!(TaskFilter::Waiting.status(), TaskStatus::WaitingOnClient);
        assert_eq!(TaskFilter::Completed.label(), "Completed");
    }

    #[test]
    fn test_stale_filter_response_discarded() {
        let mut page = TasksPage::new();
        page.begin_load();
        page.cycle_filter();

        assert!(!page.apply_tasks(TaskFilter::Open, Ok(vec![task(1, "OPEN")])));
        assert!(page.tasks.is_empty());
        assert!(page.loading);

        assert!(page.apply_tasks(TaskFilter::Completed, Ok(vec![task(2, "DONE")])));
        assert_eq!(page.tasks[0].id, 2);
        assert!(!page.loading);
    }

    #[test]
    fn test_failed_completion_keeps_task_visible() {
        let mut page = TasksPage::new();
        page.apply_tasks(TaskFilter::Open, Ok(vec![task(5, "OPEN")]));
        assert_eq!(page.begin_complete(), Some(5));

        page.apply_complete(
            TaskFilter::Open,
            CommandOutcome::MutationFailed(ApiError::from_status(500, "")),
        );

        assert_eq!(page.tasks, vec![task(5, "OPEN")]);
        assert!(page.completing.is_none());

        // A later refetch that still returns it keeps it visible
        page.apply_tasks(TaskFilter::Open, Ok(vec![task(5, "OPEN")]));
        assert_eq!(page.tasks.len(), 1);
    }

    #[test]
    fn test_completed_task_not_offered() {
        let mut page = TasksPage::new();
        page.cycle_filter();
        page.apply_tasks(TaskFilter::Completed, Ok(vec![task(1, "DONE")]));
        assert_eq!(page.begin_complete(), None);
    }
}
