//! API request and response models

use crate::db::models::ProjectStatus;
use serde::{Deserialize, Serialize};

/// Generic response for state-changing operations
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

/// Query parameters for listing projects
#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub status: Option<ProjectStatus>,
}

/// Request payload for creating a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub engineer: Option<String>,
    pub contractor: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub contact: Option<String>,
    pub drive_link: Option<String>,
}

/// Request payload for creating an appointment
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub title: String,
    pub appt_date: String,
    pub appt_time: String,
    pub attendees: Option<String>,
}

/// Request payload for creating a reminder
#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    pub text: String,
}

/// Response for toggling a reminder
#[derive(Debug, Serialize)]
pub struct ToggleReminderResponse {
    pub id: i64,
    pub done: bool,
}

/// Request payload for creating a partner
#[derive(Debug, Deserialize)]
pub struct CreatePartnerRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Request payload for creating a team member
#[derive(Debug, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
