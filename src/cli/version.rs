//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("copilot {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}\n\
         Terminal client for the Inbox Copilot service.\n\n\
         USAGE:\n    copilot [FLAGS]\n\n\
         FLAGS:\n    \
         -h, --help       Print this help\n    \
         -V, --version    Print version\n        \
         --logout     Remove the stored session\n\n\
         ENVIRONMENT:\n    \
         COPILOT_API_URL  API base URL (default http://localhost:8000/api/v1)\n    \
         COPILOT_LOG      Log filter (default inbox_copilot=info)",
        version_text()
    )
}
