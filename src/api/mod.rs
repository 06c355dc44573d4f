//! REST API access.
//!
//! [`ApiClient`] is the only component that talks to the network. Endpoint
//! methods live in [`endpoints`] and return records from [`crate::models`].

mod client;
pub mod endpoints;

pub use client::ApiClient;
