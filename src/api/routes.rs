//! API routes

use crate::api::handlers::{
    complete_project, create_appointment, create_partner, create_project, create_reminder,
    create_team_member, delete_appointment, get_project, health_check, list_appointments,
    list_partners, list_projects, list_reminders, list_team_members, toggle_reminder, AppState,
};
use crate::auth::handlers::{get_me, login, logout, register};
use crate::auth::middleware::require_login;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

/// Build the API routes
pub fn build_api_routes(state: AppState) -> Router {
    // Public routes: registration, login, health. Everything else sits
    // behind the session gate.
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/health", get(health_check));

    let protected_routes = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/me", get(get_me))
        // Projects
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/:id", get(get_project))
        .route("/api/projects/:id/complete", post(complete_project))
        // Appointments
        .route(
            "/api/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route("/api/appointments/:id", delete(delete_appointment))
        // Reminders
        .route("/api/reminders", get(list_reminders).post(create_reminder))
        .route("/api/reminders/:id/toggle", post(toggle_reminder))
        // Partners
        .route("/api/partners", get(list_partners).post(create_partner))
        // Team
        .route("/api/team", get(list_team_members).post(create_team_member))
        .layer(middleware::from_fn_with_state(state.clone(), require_login));

    public_routes.merge(protected_routes).with_state(state)
}
