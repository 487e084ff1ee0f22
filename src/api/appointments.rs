//! Appointment moderation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::appointment::{Appointment, AppointmentDetails},
};

use super::AuthenticatedStaff;

/// List all appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All appointments, newest first", body = Vec<AppointmentDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    let appointments = state.services.appointments.list().await?;
    Ok(Json(appointments))
}

/// Approve a pending appointment
#[utoipa::path(
    post,
    path = "/appointments/{id}/approve",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment approved", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Appointment is no longer pending"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn approve_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.approve(id).await?;
    Ok(Json(appointment))
}

/// Decline a pending appointment
#[utoipa::path(
    post,
    path = "/appointments/{id}/decline",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment declined", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Appointment is no longer pending"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn decline_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.decline(id).await?;
    Ok(Json(appointment))
}
