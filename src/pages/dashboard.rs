use tracing::warn;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Contact, SyncResponse, Task, TaskStatus};

use super::Banner;

pub const ACTIVITY_PLACEHOLDER: &str = "Activity feed coming soon...";
pub const SYNCING_NOTICE: &str = "Syncing emails...";
pub const SYNC_FAILED_NOTICE: &str = "Sync failed";

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub contacts: usize,
    pub tasks_open: usize,
    pub tasks_overdue: usize,
}

impl DashboardStats {
    /// `tasks` is the OPEN collection; overdue is the server's flag.
    pub fn from_collections(contacts: &[Contact], tasks: &[Task]) -> Self {
        Self {
            contacts: contacts.len(),
            tasks_open: tasks.len(),
            tasks_overdue: tasks.iter().filter(|t| t.overdue).count(),
        }
    }
}

/// Fetch contacts and open tasks concurrently and compute the stats.
pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    let (contacts, tasks) = tokio::try_join!(
        api.list_contacts(),
        api.list_tasks(Some(TaskStatus::Open))
    )?;
    Ok(DashboardStats::from_collections(&contacts, &tasks))
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    pub stats: DashboardStats,
    pub loading: bool,
    pub syncing: bool,
    pub notice: Option<Banner>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_stats(&mut self, result: Result<DashboardStats, ApiError>) {
        self.loading = false;
        match result {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!("Failed to fetch dashboard data: {}", e),
        }
    }

    /// Start a sync. Returns false if one is already running.
    pub fn begin_sync(&mut self) -> bool {
        if self.syncing {
            return false;
        }
        self.syncing = true;
        self.notice = Some(Banner::info(SYNCING_NOTICE));
        true
    }

    pub fn apply_sync(&mut self, result: Result<SyncResponse, ApiError>) {
        self.syncing = false;
        self.notice = Some(match result {
            Ok(response) => Banner::success(response.notice()),
            Err(e) => {
                warn!("Email sync failed: {}", e);
                Banner::error(SYNC_FAILED_NOTICE)
            }
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
