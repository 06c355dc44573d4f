use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::EmailThread;

use super::ListCursor;

pub const PLACEHOLDER: &str = "Select a thread to view messages";
pub const EMPTY_TEXT: &str = "No email threads.";

/// Thread list plus the currently opened thread.
#[derive(Debug, Default)]
pub struct ThreadsPage {
    pub threads: Vec<EmailThread>,
    pub loading: bool,
    pub cursor: ListCursor,
    /// Opened thread with its messages
    pub selected: Option<EmailThread>,
    /// Thread whose detail fetch is in flight
    pub opening: Option<i64>,
}

impl ThreadsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_threads(&mut self, result: Result<Vec<EmailThread>, ApiError>) {
        self.loading = false;
        match result {
            Ok(threads) => {
                self.threads = threads;
                self.cursor.clamp(self.threads.len());
            }
            Err(e) => warn!("Failed to fetch threads: {}", e),
        }
    }

    /// Id of the highlighted thread, marked as opening.
    pub fn begin_open(&mut self) -> Option<i64> {
        let id = self
            .cursor
            .selected(self.threads.len())
            .and_then(|i| self.threads.get(i))?
            .id;
        self.opening = Some(id);
        Some(id)
    }

    /// Apply a detail fetch. A result for a thread that is no longer the
    /// one being opened is dropped.
    pub fn apply_thread(&mut self, id: i64, result: Result<EmailThread, ApiError>) {
        if self.opening != Some(id) {
            debug!("Dropping stale thread {}", id);
            return;
        }
        self.opening = None;
        match result {
            Ok(thread) => self.selected = Some(thread),
            Err(e) => warn!("Failed to fetch thread {}: {}", id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(id: i64) -> EmailThread {
        serde_json::from_value(serde_json::json!({"id": id, "subject": format!("s{}", id)})).unwrap()
    }

    #[test]
    fn test_open_thread() {
        let mut page = ThreadsPage::new();
        page.apply_threads(Ok(vec![thread(1), thread(2)]));
        page.cursor.move_down(2);

        assert_eq!(page.begin_open(), Some(2));
        page.apply_thread(2, Ok(thread(2)));

        assert_eq!(page.selected.as_ref().unwrap().id, 2);
        assert!(page.opening.is_none());
    }

    #[test]
    fn test_stale_detail_dropped() {
        let mut page = ThreadsPage::new();
        page.apply_threads(Ok(vec![thread(1), thread(2)]));
        page.begin_open();
        page.cursor.move_down(2);
        page.begin_open();

        page.apply_thread(1, Ok(thread(1)));
        assert!(page.selected.is_none());

        page.apply_thread(2, Ok(thread(2)));
        assert_eq!(page.selected.as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_nothing_to_open() {
        let mut page = ThreadsPage::new();
        assert_eq!(page.begin_open(), None);
    }
}
