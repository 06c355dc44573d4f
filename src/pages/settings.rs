use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{ResetDemoResponse, User};

use super::Banner;

pub const RESET_FALLBACK_ERROR: &str = "Failed to reset demo";

/// Banner text for a failed reset: the server's `detail`, else the error
/// text, else a fixed fallback.
pub fn reset_error_text(err: &ApiError) -> String {
    if let Some(detail) = err.detail().filter(|d| !d.is_empty()) {
        return detail.to_string();
    }
    let text = err.to_string();
    if text.is_empty() {
        RESET_FALLBACK_ERROR.to_string()
    } else {
        text
    }
}

/// Profile and demo-reset controls.
#[derive(Debug, Default)]
pub struct SettingsPage {
    pub user: Option<User>,
    pub loading: bool,
    /// Reset confirmation prompt is showing
    pub confirming: bool,
    pub resetting: bool,
    pub banner: Option<Banner>,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_user(&mut self, result: Result<User, ApiError>) {
        self.loading = false;
        match result {
            Ok(user) => self.user = Some(user),
            Err(e) => warn!("Failed to fetch user: {}", e),
        }
    }

    /// Show the confirmation prompt. Ignored while a reset is running.
    pub fn request_reset(&mut self) {
        if !self.resetting {
            self.confirming = true;
        }
    }

    pub fn cancel_reset(&mut self) {
        self.confirming = false;
    }

    /// Confirm the prompt. Returns true if the reset should be sent.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.confirming || self.resetting {
            return false;
        }
        self.confirming = false;
        self.resetting = true;
        self.banner = None;
        true
    }

    pub fn apply_reset(&mut self, result: Result<ResetDemoResponse, ApiError>) {
        self.resetting = false;
        self.banner = Some(match result {
            Ok(response) => {
                info!("Demo reset: {:?}", response.deleted);
                Banner::success(response.deleted.summary())
            }
            Err(e) => {
                warn!("Demo reset failed: {}", e);
                Banner::error(reset_error_text(&e))
            }
        });
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}
