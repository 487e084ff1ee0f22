//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedStaff;

/// Appointment counts by status
#[derive(Serialize, ToSchema)]
pub struct AppointmentBreakdown {
    pub pending: i64,
    pub approved: i64,
    pub declined: i64,
    /// Schema-defined terminal state; no flow assigns it yet
    pub completed: i64,
}

/// Dashboard statistics
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_visitors: i64,
    pub total_employees: i64,
    pub pending_appointments: i64,
    /// Visitors currently on site (open check-ins)
    pub checked_in_now: i64,
    pub appointments: AppointmentBreakdown,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
