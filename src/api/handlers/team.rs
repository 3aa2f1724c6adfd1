//! Team member API handlers

use crate::api::handlers::AppState;
use crate::api::models::CreateTeamMemberRequest;
use crate::core::error::{Result, SitedeskError};
use crate::db::models::TeamMember;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Handler for GET /api/team - list team members alphabetically
pub async fn list_team_members(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>> {
    let members = state.team_repo.find_all().await?;
    Ok(Json(members))
}

/// Handler for POST /api/team - add a team member
pub async fn create_team_member(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Team member name is required".to_string(),
        ));
    }
    if req.role.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Team member role is required".to_string(),
        ));
    }

    let member = TeamMember {
        id: 0,
        name: req.name.trim().to_string(),
        role: req.role.trim().to_string(),
        email: req.email,
        phone: req.phone,
    };

    let id = state.team_repo.create(&member).await?;
    tracing::info!(member_id = id, name = %member.name, "Team member added");

    Ok((StatusCode::CREATED, Json(TeamMember { id, ..member })))
}
