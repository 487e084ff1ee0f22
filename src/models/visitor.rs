//! Visitor model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Visitor model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visitor {
    pub id: Uuid,
    /// Human-facing visitor code (VIS...)
    pub visitor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    /// QR badge as a PNG data URI, attached at registration
    pub qr_code: Option<String>,
    /// No verification flow assigns this; it stays false
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Short visitor representation for joined views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VisitorShort {
    pub id: Uuid,
    pub visitor_id: String,
    pub name: String,
    pub company: Option<String>,
}

/// Pre-registration request: visitor details plus the planned visit
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterVisitor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub company: Option<String>,
    /// Employee the visitor is coming to see
    pub employee_id: Uuid,
    #[validate(length(min = 1, message = "Purpose is required"))]
    pub purpose: String,
    pub visit_date: NaiveDate,
    /// Visit time, HH:MM or HH:MM:SS
    #[validate(length(min = 1, message = "Visit time is required"))]
    pub visit_time: String,
}

/// Visitor row parameters for insertion
#[derive(Debug)]
pub struct NewVisitor {
    pub visitor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub qr_code: String,
}
