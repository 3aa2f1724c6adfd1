//! Core infrastructure: configuration, error types and logging

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Result, SitedeskError};
pub use logging::Logger;
