//! Appointment model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::employee::EmployeeShort;
use super::enums::AppointmentStatus;
use super::visitor::VisitorShort;

/// Appointment model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub visitor_id: Uuid,
    pub employee_id: Uuid,
    pub purpose: String,
    pub visit_date: NaiveDate,
    #[schema(value_type = String, example = "09:30:00")]
    pub visit_time: NaiveTime,
    pub status: AppointmentStatus,
    /// Set exactly once, when the appointment is approved
    pub approved_at: Option<DateTime<Utc>>,
    /// Set true on approval; no calendar backend consumes it
    pub calendar_blocked: bool,
    pub created_at: DateTime<Utc>,
}

/// Short appointment representation for joined views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentShort {
    pub id: Uuid,
    pub purpose: String,
    pub visit_date: NaiveDate,
    #[schema(value_type = String, example = "09:30:00")]
    pub visit_time: NaiveTime,
    pub status: AppointmentStatus,
}

/// Appointment with joined visitor and employee summaries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDetails {
    pub id: Uuid,
    pub purpose: String,
    pub visit_date: NaiveDate,
    #[schema(value_type = String, example = "09:30:00")]
    pub visit_time: NaiveTime,
    pub status: AppointmentStatus,
    pub approved_at: Option<DateTime<Utc>>,
    pub calendar_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub visitor: VisitorShort,
    pub employee: EmployeeShort,
}

/// New appointment parameters for insertion
#[derive(Debug)]
pub struct NewAppointment {
    pub visitor_id: Uuid,
    pub employee_id: Uuid,
    pub purpose: String,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
}
