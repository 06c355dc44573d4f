//! Page models.
//!
//! Each page owns a transient copy of the records it shows, a loading flag
//! and `apply_*` transitions for fetch results. Network work is spawned by
//! [`crate::app::App`]; pages never perform IO themselves. A fetch result
//! always replaces the page's collection wholesale.
//!
//! List-fetch failures are logged and leave the previous state in place.
//! Only user-initiated actions with visible outcomes (sync, demo reset,
//! login) surface text to the user.

pub mod calendar;
pub mod command;
pub mod contacts;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod tasks;
pub mod threads;
pub mod today;

pub use calendar::CalendarPage;
pub use command::{mutate_then_reload, CommandOutcome};
pub use contacts::ContactsPage;
pub use dashboard::{DashboardPage, DashboardStats};
pub use login::{LoginField, LoginPage};
pub use settings::SettingsPage;
pub use tasks::{TaskFilter, TasksPage};
pub use threads::ThreadsPage;
pub use today::TodayPage;

/// Selection within a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
}

impl ListCursor {
    /// Selected index, or `None` for an empty list.
    pub fn selected(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Keep the cursor inside a list that changed length.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// A dismissable notice shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}
