use tracing::warn;

use crate::error::ApiError;
use crate::models::Contact;

use super::ListCursor;

pub const EMPTY_TEXT: &str = "No contacts yet.";

#[derive(Debug, Default)]
pub struct ContactsPage {
    pub contacts: Vec<Contact>,
    pub loading: bool,
    pub cursor: ListCursor,
}

impl ContactsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_contacts(&mut self, result: Result<Vec<Contact>, ApiError>) {
        self.loading = false;
        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                self.cursor.clamp(self.contacts.len());
            }
            Err(e) => warn!("Failed to fetch contacts: {}", e),
        }
    }
}
