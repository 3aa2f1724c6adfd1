//! Appointment API handlers

use crate::api::handlers::AppState;
use crate::api::models::{ActionResponse, CreateAppointmentRequest};
use crate::core::error::{Result, SitedeskError};
use crate::db::models::Appointment;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Handler for GET /api/appointments - list all appointments in calendar order
pub async fn list_appointments(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>> {
    let appointments = state.appointment_repo.find_all().await?;
    Ok(Json(appointments))
}

/// Handler for POST /api/appointments - create an appointment
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Appointment title is required".to_string(),
        ));
    }
    if req.appt_date.trim().is_empty() || req.appt_time.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Appointment date and time are required".to_string(),
        ));
    }

    let appointment = Appointment {
        id: 0,
        title: req.title.trim().to_string(),
        appt_date: req.appt_date,
        appt_time: req.appt_time,
        attendees: req.attendees,
    };

    let id = state.appointment_repo.create(&appointment).await?;
    tracing::info!(appointment_id = id, title = %appointment.title, "Appointment created");

    Ok((
        StatusCode::CREATED,
        Json(Appointment { id, ..appointment }),
    ))
}

/// Handler for DELETE /api/appointments/:id - remove an appointment
///
/// Appointments are the only entity that supports deletion.
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResponse>> {
    let removed = state.appointment_repo.delete(id).await?;
    if !removed {
        return Err(SitedeskError::NotFound(format!(
            "Appointment {} not found",
            id
        )));
    }

    tracing::info!(appointment_id = id, "Appointment deleted");
    Ok(Json(ActionResponse {
        success: true,
        message: "Appointment deleted".to_string(),
    }))
}
