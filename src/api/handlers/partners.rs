//! Partner API handlers

use crate::api::handlers::AppState;
use crate::api::models::CreatePartnerRequest;
use crate::core::error::{Result, SitedeskError};
use crate::db::models::Partner;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Handler for GET /api/partners - list partners alphabetically
pub async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>> {
    let partners = state.partner_repo.find_all().await?;
    Ok(Json(partners))
}

/// Handler for POST /api/partners - create a partner
pub async fn create_partner(
    State(state): State<AppState>,
    Json(req): Json<CreatePartnerRequest>,
) -> Result<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(SitedeskError::ValidationError(
            "Partner name is required".to_string(),
        ));
    }

    let partner = Partner {
        id: 0,
        name: req.name.trim().to_string(),
        kind: req.kind,
        contact_person: req.contact_person,
        contact_email: req.contact_email,
        contact_phone: req.contact_phone,
    };

    let id = state.partner_repo.create(&partner).await?;
    tracing::info!(partner_id = id, name = %partner.name, "Partner created");

    Ok((StatusCode::CREATED, Json(Partner { id, ..partner })))
}
