//! Command-line flags handled before the TUI starts.
//!
//! ```ignore
//! use inbox_copilot::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::Result;

use crate::auth::SessionFileManager;
use crate::config::ClientConfig;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the command's result.
pub fn run_cli_command(command: CliCommand, config: &ClientConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Logout => Some(handle_logout_command(config)),
        CliCommand::RunTui => None,
    }
}

/// Delete the stored session file.
fn handle_logout_command(config: &ClientConfig) -> Result<()> {
    SessionFileManager::with_path(&config.session_path).clear()?;
    println!("Logged out.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use tempfile::TempDir;

    #[test]
    fn test_run_tui_returns_none() {
        let config = ClientConfig::default();
        assert!(run_cli_command(CliCommand::RunTui, &config).is_none());
    }

    #[test]
    fn test_logout_removes_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        let manager = SessionFileManager::with_path(&path);
        manager.save(&Session::with_token("tok")).unwrap();

        let config = ClientConfig::default().with_session_path(&path);
        let result = run_cli_command(CliCommand::Logout, &config).unwrap();

        assert!(result.is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_logout_without_session_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::default().with_session_path(temp_dir.path().join("none.json"));
        assert!(run_cli_command(CliCommand::Logout, &config).unwrap().is_ok());
    }
}
