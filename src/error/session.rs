//! Session persistence errors.

use thiserror::Error;

/// Session storage failures.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Reading the session file failed.
    #[error("failed to load session: {0}")]
    LoadFailed(String),

    /// Writing the session file failed.
    #[error("failed to save session: {0}")]
    SaveFailed(String),

    /// Removing the session file failed.
    #[error("failed to clear session: {0}")]
    ClearFailed(String),

    /// The session file exists but is not valid JSON.
    #[error("session file is corrupt: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        assert_eq!(
            SessionError::SaveFailed("disk full".to_string()).to_string(),
            "failed to save session: disk full"
        );
        assert_eq!(
            SessionError::NoHomeDirectory.to_string(),
            "could not determine home directory"
        );
    }

    #[test]
    fn test_session_error_implements_error_trait() {
        let err = SessionError::ClearFailed("busy".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
