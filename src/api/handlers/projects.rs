//! Project API handlers

use crate::api::handlers::AppState;
use crate::api::models::{ActionResponse, CreateProjectRequest, ProjectListQuery};
use crate::core::error::{Result, SitedeskError};
use crate::db::models::{Project, ProjectStatus};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Handler for GET /api/projects - list projects by status
///
/// Without an explicit status the listing shows the ongoing work.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<Project>>> {
    let status = query.status.unwrap_or(ProjectStatus::Ongoing);
    let projects = state.project_repo.find_by_status(status).await?;
    Ok(Json(projects))
}

/// Handler for POST /api/projects - create a project
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Project name is required".to_string(),
        ));
    }

    let project = Project {
        id: 0,
        name: req.name.trim().to_string(),
        engineer: req.engineer,
        contractor: req.contractor,
        start_date: req.start_date,
        due_date: req.due_date,
        contact: req.contact,
        drive_link: req.drive_link,
        status: ProjectStatus::Ongoing,
    };

    let id = state.project_repo.create(&project).await?;
    tracing::info!(project_id = id, name = %project.name, "Project created");

    let created = state
        .project_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| SitedeskError::TaskError("created project not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /api/projects/:id - fetch a single project
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>> {
    let project = state
        .project_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| SitedeskError::NotFound(format!("Project {} not found", id)))?;
    Ok(Json(project))
}

/// Handler for POST /api/projects/:id/complete - mark a project completed
///
/// Completion hides the project from the default listing; the record itself
/// is kept.
pub async fn complete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResponse>> {
    let changed = state
        .project_repo
        .set_status(id, ProjectStatus::Completed)
        .await?;
    if !changed {
        return Err(SitedeskError::NotFound(format!("Project {} not found", id)));
    }

    tracing::info!(project_id = id, "Project marked completed");
    Ok(Json(ActionResponse {
        success: true,
        message: "Project marked as completed".to_string(),
    }))
}
