//! Reminder API handlers

use crate::api::handlers::AppState;
use crate::api::models::{CreateReminderRequest, ToggleReminderResponse};
use crate::core::error::{Result, SitedeskError};
use crate::db::models::Reminder;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Handler for GET /api/reminders - list reminders, open ones first
pub async fn list_reminders(State(state): State<AppState>) -> Result<Json<Vec<Reminder>>> {
    let reminders = state.reminder_repo.find_all().await?;
    Ok(Json(reminders))
}

/// Handler for POST /api/reminders - create a reminder
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(req): Json<CreateReminderRequest>,
) -> Result<impl IntoResponse> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(SitedeskError::ValidationError(
            "Reminder text is required".to_string(),
        ));
    }

    let id = state.reminder_repo.create(text).await?;
    tracing::info!(reminder_id = id, "Reminder created");

    Ok((
        StatusCode::CREATED,
        Json(Reminder {
            id,
            text: text.to_string(),
            done: false,
        }),
    ))
}

/// Handler for POST /api/reminders/:id/toggle - flip a reminder's done flag
pub async fn toggle_reminder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToggleReminderResponse>> {
    let done = state
        .reminder_repo
        .toggle_done(id)
        .await?
        .ok_or_else(|| SitedeskError::NotFound(format!("Reminder {} not found", id)))?;

    tracing::info!(reminder_id = id, done, "Reminder toggled");
    Ok(Json(ToggleReminderResponse { id, done }))
}
