//! Check-in model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::appointment::AppointmentShort;
use super::visitor::VisitorShort;

/// Check-in model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckIn {
    pub id: Uuid,
    pub visitor_id: Uuid,
    pub appointment_id: Uuid,
    pub checked_in_at: DateTime<Utc>,
    /// Null while the visit is in progress; written once at check-out
    pub checked_out_at: Option<DateTime<Utc>>,
    /// Staff account that performed the check-in
    pub security_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Check-in with joined visitor and appointment summaries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInDetails {
    pub id: Uuid,
    pub checked_in_at: DateTime<Utc>,
    pub checked_out_at: Option<DateTime<Utc>>,
    pub visitor: VisitorShort,
    pub appointment: AppointmentShort,
}
