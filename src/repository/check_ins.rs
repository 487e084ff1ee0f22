//! Check-ins repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::AppointmentShort,
        check_in::{CheckIn, CheckInDetails},
        visitor::VisitorShort,
    },
};

#[derive(Clone)]
pub struct CheckInsRepository {
    pool: Pool<Postgres>,
}

impl CheckInsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get check-in by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CheckIn> {
        sqlx::query_as::<_, CheckIn>("SELECT * FROM check_ins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Check-in with id {} not found", id)))
    }

    /// Create a check-in for an approved appointment.
    /// The partial unique index on open check-ins turns a concurrent second
    /// check-in into a conflict instead of a duplicate row.
    pub async fn create(
        &self,
        visitor_id: Uuid,
        appointment_id: Uuid,
        security_user_id: Uuid,
    ) -> AppResult<CheckIn> {
        let created = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (visitor_id, appointment_id, checked_in_at, security_user_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (visitor_id) WHERE checked_out_at IS NULL DO NOTHING
            RETURNING *
            "#,
        )
        .bind(visitor_id)
        .bind(appointment_id)
        .bind(Utc::now())
        .bind(security_user_id)
        .fetch_optional(&self.pool)
        .await?;

        created.ok_or_else(|| {
            AppError::Conflict("Visitor already has an open check-in".to_string())
        })
    }

    /// Close a check-in. The checked_out_at timestamp is written once: a
    /// repeated check-out matches zero rows and returns the stored record
    /// unchanged.
    pub async fn check_out(&self, id: Uuid) -> AppResult<CheckIn> {
        let updated = sqlx::query_as::<_, CheckIn>(
            r#"
            UPDATE check_ins
            SET checked_out_at = $2
            WHERE id = $1 AND checked_out_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(check_in) => Ok(check_in),
            None => self.get_by_id(id).await,
        }
    }

    /// List recent check-ins with visitor and appointment summaries
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<CheckInDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.checked_in_at, c.checked_out_at,
                   v.id as visitor_uid, v.visitor_id as visitor_code,
                   v.name as visitor_name, v.company as visitor_company,
                   a.id as appointment_uid, a.purpose as appointment_purpose,
                   a.visit_date as appointment_visit_date,
                   a.visit_time as appointment_visit_time,
                   a.status as appointment_status
            FROM check_ins c
            JOIN visitors v ON c.visitor_id = v.id
            JOIN appointments a ON c.appointment_id = a.id
            ORDER BY c.checked_in_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            result.push(CheckInDetails {
                id: row.get("id"),
                checked_in_at: row.get("checked_in_at"),
                checked_out_at: row.get("checked_out_at"),
                visitor: VisitorShort {
                    id: row.get("visitor_uid"),
                    visitor_id: row.get("visitor_code"),
                    name: row.get("visitor_name"),
                    company: row.get("visitor_company"),
                },
                appointment: AppointmentShort {
                    id: row.get("appointment_uid"),
                    purpose: row.get("appointment_purpose"),
                    visit_date: row.get("appointment_visit_date"),
                    visit_time: row.get("appointment_visit_time"),
                    status: row.get("appointment_status"),
                },
            });
        }

        Ok(result)
    }

    /// Count check-ins that are still open
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM check_ins WHERE checked_out_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
