use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::deserialize_optional_timestamp;

/// Where a contact sits in the sales pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStage {
    #[default]
    NewLead,
    Contacted,
    Qualified,
    ShowingScheduled,
    ActiveSearch,
    OfferMade,
    UnderContract,
    Closed,
    Lost,
    Nurture,
    #[serde(other)]
    Unknown,
}

impl PipelineStage {
    /// Wire value, shown as-is on contact cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::NewLead => "NEW_LEAD",
            PipelineStage::Contacted => "CONTACTED",
            PipelineStage::Qualified => "QUALIFIED",
            PipelineStage::ShowingScheduled => "SHOWING_SCHEDULED",
            PipelineStage::ActiveSearch => "ACTIVE_SEARCH",
            PipelineStage::OfferMade => "OFFER_MADE",
            PipelineStage::UnderContract => "UNDER_CONTRACT",
            PipelineStage::Closed => "CLOSED",
            PipelineStage::Lost => "LOST",
            PipelineStage::Nurture => "NURTURE",
            PipelineStage::Unknown => "UNKNOWN",
        }
    }
}

/// A contact from `/contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub pipeline_stage: PipelineStage,
    #[serde(default)]
    pub profile_summary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Name for display, falling back to the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_contact() {
        let json = r#"{
            "name": "Priya Shah",
            "email": "priya@example.com",
            "phone": null,
            "pipeline_stage": "ACTIVE_SEARCH",
            "profile_summary": "First-time buyer, 2BR condo",
            "preferences": {"budget": 650000},
            "notes": null,
            "id": 3,
            "agent_id": 1,
            "created_at": "2024-04-01T12:00:00",
            "updated_at": null
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.display_name(), "Priya Shah");
        assert_eq!(contact.pipeline_stage, PipelineStage::ActiveSearch);
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let contact: Contact =
            serde_json::from_str(r#"{"id": 1, "email": "x@example.com", "name": "  "}"#).unwrap();
        assert_eq!(contact.display_name(), "x@example.com");
        assert_eq!(contact.pipeline_stage, PipelineStage::NewLead);
    }
}
