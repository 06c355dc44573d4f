use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::{deserialize_optional_timestamp, deserialize_timestamp};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailDirection {
    Incoming,
    Outgoing,
    #[serde(other)]
    Unknown,
}

/// One message of an email thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailMessage {
    pub id: i64,
    #[serde(default)]
    pub thread_id: Option<i64>,
    pub from_email: String,
    #[serde(default)]
    pub to_emails: Option<Vec<String>>,
    pub direction: EmailDirection,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub sent_at: DateTime<Utc>,
}

impl EmailMessage {
    pub fn is_outgoing(&self) -> bool {
        self.direction == EmailDirection::Outgoing
    }
}

/// An email thread. The list endpoint may omit `messages`; the detail
/// endpoint includes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailThread {
    pub id: i64,
    #[serde(default)]
    pub thread_id: String,
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub contact_id: Option<i64>,
    #[serde(default)]
    pub messages: Vec<EmailMessage>,
}
