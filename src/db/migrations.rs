//! Database schema migrations

use crate::core::error::{Result, SitedeskError};
use rusqlite::Connection;
use tracing::info;

/// Migration version tracking table
const MIGRATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Initial schema migration (version 1)
const MIGRATION_V1: &str = r#"
-- Credentials table (authentication). The primary key doubles as the
-- uniqueness constraint that backs registration.
CREATE TABLE IF NOT EXISTS credentials (
    username TEXT PRIMARY KEY,
    salt TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Projects table
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    engineer TEXT,
    contractor TEXT,
    start_date TEXT,
    due_date TEXT,
    contact TEXT,
    drive_link TEXT,
    status TEXT NOT NULL DEFAULT 'ongoing'
);

CREATE INDEX IF NOT EXISTS idx_projects_status ON projects(status);

-- Appointments table
CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    appt_date TEXT NOT NULL,
    appt_time TEXT NOT NULL,
    attendees TEXT
);

-- Reminders table
CREATE TABLE IF NOT EXISTS reminders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0
);

-- Partners table
CREATE TABLE IF NOT EXISTS partners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    kind TEXT,
    contact_person TEXT,
    contact_email TEXT,
    contact_phone TEXT
);

-- Team members table
CREATE TABLE IF NOT EXISTS team_members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    email TEXT,
    phone TEXT
);
"#;

/// All migrations in order. New schema changes append here.
const MIGRATIONS: &[(i64, &str)] = &[(1, MIGRATION_V1)];

/// Run all pending migrations on the given connection.
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(MIGRATION_TABLE)
        .map_err(SitedeskError::DatabaseError)?;

    let current: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(SitedeskError::DatabaseError)?;

    for (version, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        info!(version, "Applying database migration");

        let tx = conn.transaction().map_err(SitedeskError::DatabaseError)?;
        tx.execute_batch(sql).map_err(SitedeskError::DatabaseError)?;
        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?)",
            [version],
        )
        .map_err(SitedeskError::DatabaseError)?;
        tx.commit().map_err(SitedeskError::DatabaseError)?;
    }

    Ok(())
}
