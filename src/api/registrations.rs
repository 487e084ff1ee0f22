//! Visitor pre-registration endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{enums::AppointmentStatus, visitor::RegisterVisitor},
};

/// Registration response: the visitor code to present at the desk
#[derive(Serialize, ToSchema)]
pub struct RegistrationResponse {
    /// Human-facing visitor code (VIS...)
    pub visitor_id: String,
    /// QR badge as a PNG data URI
    pub qr_code: String,
    pub appointment_id: Uuid,
    pub status: AppointmentStatus,
}

/// Register a visitor and their appointment.
/// Public: the registration form is filled in by the visitor themselves.
#[utoipa::path(
    post,
    path = "/registrations",
    tag = "registrations",
    request_body = RegisterVisitor,
    responses(
        (status = 201, description = "Visitor registered", body = RegistrationResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterVisitor>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (visitor, appointment) = state.services.registration.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            visitor_id: visitor.visitor_id,
            qr_code: visitor.qr_code.unwrap_or_default(),
            appointment_id: appointment.id,
            status: appointment.status,
        }),
    ))
}
