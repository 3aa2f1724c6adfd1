//! Sitedesk Backend Library
//!
//! Back-office service for a construction company: projects, appointments,
//! reminders, partners and team members behind a session-based login wall.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use crate::core::{Config, Logger};
pub use api::ApiServer;
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
