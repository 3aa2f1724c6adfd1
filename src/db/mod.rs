//! Database layer
//!
//! Connection pooling, schema migrations, table models and repositories.

pub mod manager;
pub mod migrations;
pub mod models;
pub mod repository;

pub use manager::DatabaseManager;
