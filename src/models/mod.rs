//! Typed records for every API response.
//!
//! Parsing happens once, in the API client; pages only ever see these types.

pub mod contact;
pub mod responses;
pub mod task;
pub mod thread;
pub mod timestamp;
pub mod user;

pub use contact::{Contact, PipelineStage};
pub use responses::{
    ChatRequest, ChatResponse, DeletedCounts, PreservedCounts, ResetDemoResponse, SyncResponse,
    TokenResponse,
};
pub use task::{Task, TaskPriority, TaskStatus, TaskType, TaskUpdate};
pub use thread::{EmailDirection, EmailMessage, EmailThread};
pub use timestamp::parse_timestamp;
pub use user::{User, UserRole};
