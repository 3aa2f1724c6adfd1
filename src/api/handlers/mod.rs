pub mod appointments;
pub mod partners;
pub mod projects;
pub mod reminders;
pub mod system;
pub mod team;

pub use appointments::*;
pub use partners::*;
pub use projects::*;
pub use reminders::*;
pub use system::*;
pub use team::*;

use crate::auth::SessionStore;
use crate::core::config::SessionConfig;
use crate::db::manager::DatabaseManager;
use crate::db::repository::{
    AppointmentRepository, CredentialRepository, PartnerRepository, ProjectRepository,
    ReminderRepository, TeamMemberRepository,
};
use std::sync::Arc;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub credential_repo: Arc<CredentialRepository>,
    pub project_repo: Arc<ProjectRepository>,
    pub appointment_repo: Arc<AppointmentRepository>,
    pub reminder_repo: Arc<ReminderRepository>,
    pub partner_repo: Arc<PartnerRepository>,
    pub team_repo: Arc<TeamMemberRepository>,
    pub sessions: SessionStore,
    session_cookie_name: Arc<String>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseManager>, session_config: &SessionConfig) -> Self {
        Self {
            credential_repo: Arc::new(CredentialRepository::new(db.clone())),
            project_repo: Arc::new(ProjectRepository::new(db.clone())),
            appointment_repo: Arc::new(AppointmentRepository::new(db.clone())),
            reminder_repo: Arc::new(ReminderRepository::new(db.clone())),
            partner_repo: Arc::new(PartnerRepository::new(db.clone())),
            team_repo: Arc::new(TeamMemberRepository::new(db)),
            sessions: SessionStore::new(session_config.ttl_seconds),
            session_cookie_name: Arc::new(session_config.cookie_name.clone()),
        }
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }
}
