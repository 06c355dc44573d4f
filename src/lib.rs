//! Inbox Copilot - a terminal client for the real-estate inbox assistant
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pages;
pub mod shell;
pub mod traits;
pub mod ui;
