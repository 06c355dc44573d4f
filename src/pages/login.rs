use tracing::warn;

use crate::error::ApiError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Email and password form.
#[derive(Debug, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Credentials to submit, or `None` if a field is empty or a login is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if self.submitting || self.email.trim().is_empty() || self.password.is_empty() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some((self.email.trim().to_string(), self.password.clone()))
    }

    pub fn apply_login(&mut self, result: &Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.password.clear();
                self.error = None;
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.error = Some(INVALID_CREDENTIALS.to_string());
            }
        }
    }

    /// Clear everything, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
