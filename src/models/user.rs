use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Agent,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Agent => "agent",
            UserRole::Unknown => "unknown",
        }
    }
}

/// The logged-in user (`GET /auth/me`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    /// Name for the settings page.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_str(
            r#"{"email": "alex@example.com", "name": null, "role": "admin", "id": 1, "created_at": "2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.display_name(), "Not set");
    }
}
