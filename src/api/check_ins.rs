//! Security desk check-in and check-out endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::check_in::{CheckIn, CheckInDetails},
};

use super::AuthenticatedStaff;

/// Check-in request carrying the visitor code
#[derive(Deserialize, ToSchema)]
pub struct CheckInRequest {
    /// Human-facing visitor code (VIS...)
    pub visitor_id: String,
}

/// Listing query for recent check-ins
#[derive(Deserialize, IntoParams)]
pub struct RecentQuery {
    /// Number of check-ins to return (default 10)
    pub limit: Option<i64>,
}

/// List recent check-ins
#[utoipa::path(
    get,
    path = "/check-ins",
    tag = "check-ins",
    security(("bearer_auth" = [])),
    params(RecentQuery),
    responses(
        (status = 200, description = "Recent check-ins, newest first", body = Vec<CheckInDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_check_ins(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<CheckInDetails>>> {
    let check_ins = state
        .services
        .check_ins
        .recent(query.limit.unwrap_or(10))
        .await?;
    Ok(Json(check_ins))
}

/// Check a visitor in against their approved appointment
#[utoipa::path(
    post,
    path = "/check-ins",
    tag = "check-ins",
    security(("bearer_auth" = [])),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Visitor checked in", body = CheckIn),
        (status = 404, description = "No visitor with this code"),
        (status = 409, description = "Visitor already has an open check-in"),
        (status = 422, description = "No approved appointment for this visitor"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_check_in(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(request): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<CheckIn>)> {
    let check_in = state
        .services
        .check_ins
        .check_in(&request.visitor_id, claims.staff_id)
        .await?;

    Ok((StatusCode::CREATED, Json(check_in)))
}

/// Check a visitor out
#[utoipa::path(
    post,
    path = "/check-ins/{id}/check-out",
    tag = "check-ins",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Check-in ID")
    ),
    responses(
        (status = 200, description = "Visit closed (idempotent)", body = CheckIn),
        (status = 404, description = "Check-in not found"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn check_out(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CheckIn>> {
    let check_in = state.services.check_ins.check_out(id).await?;
    Ok(Json(check_in))
}
