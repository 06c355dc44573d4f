//! Authentication for the Inbox Copilot client.
//!
//! - [`Session`] and [`SessionFileManager`] - the persisted login
//! - [`SessionContext`] - the in-process token owner shared by the API
//!   client and the navigation gate

pub mod context;
pub mod session;

pub use context::SessionContext;
pub use session::{default_session_path, Session, SessionFileManager};
