//! Error types for the Inbox Copilot client.
//!
//! - [`ApiError`] - every failure of a REST call (transport, status, decode)
//! - [`SessionError`] - session persistence failures
//!
//! Pages treat every `ApiError` the same way: log it, keep the previous
//! state. Only the demo reset shows the server's `detail` text to the user.

mod api;
mod session;

pub use api::ApiError;
pub use session::SessionError;
