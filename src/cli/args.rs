//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print usage
    Help,
    /// Remove the stored session and exit
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments (program name first).
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// ```
/// use inbox_copilot::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["copilot".to_string(), "--logout".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Logout);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            _ => {}
        }
    }
    CliCommand::RunTui
}
