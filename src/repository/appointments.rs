//! Appointments repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentDetails, NewAppointment},
        employee::EmployeeShort,
        visitor::VisitorShort,
    },
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get appointment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment with id {} not found", id)))
    }

    /// Insert a new appointment inside a registration transaction.
    /// Status starts as pending; approved_at stays null until approval.
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        appointment: &NewAppointment,
    ) -> AppResult<Appointment> {
        let created = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (visitor_id, employee_id, purpose, visit_date, visit_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(appointment.visitor_id)
        .bind(appointment.employee_id)
        .bind(&appointment.purpose)
        .bind(appointment.visit_date)
        .bind(appointment.visit_time)
        .fetch_one(&mut **tx)
        .await?;

        Ok(created)
    }

    /// Approve a pending appointment.
    /// The update is keyed on the current status, so a concurrent approval or
    /// decline makes this one match zero rows instead of overwriting.
    pub async fn approve(&self, id: Uuid, approved_at: DateTime<Utc>) -> AppResult<Appointment> {
        let updated = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = 'approved', approved_at = $2, calendar_blocked = TRUE
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(approved_at)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(appointment) => Ok(appointment),
            None => {
                let existing = self.get_by_id(id).await?;
                Err(AppError::BusinessRule(format!(
                    "Appointment is already {}",
                    existing.status
                )))
            }
        }
    }

    /// Decline a pending appointment. Only the status changes.
    pub async fn decline(&self, id: Uuid) -> AppResult<Appointment> {
        let updated = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = 'declined'
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(appointment) => Ok(appointment),
            None => {
                let existing = self.get_by_id(id).await?;
                Err(AppError::BusinessRule(format!(
                    "Appointment is already {}",
                    existing.status
                )))
            }
        }
    }

    /// Find the approved appointment to use for a check-in.
    /// When a visitor has several, the soonest visit wins.
    pub async fn next_approved_for_visitor(&self, visitor_id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE visitor_id = $1 AND status = 'approved'
            ORDER BY visit_date, visit_time
            LIMIT 1
            "#,
        )
        .bind(visitor_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }

    /// List all appointments with visitor and employee summaries, newest first
    pub async fn list_details(&self) -> AppResult<Vec<AppointmentDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.purpose, a.visit_date, a.visit_time, a.status,
                   a.approved_at, a.calendar_blocked, a.created_at,
                   v.id as visitor_uid, v.visitor_id as visitor_code,
                   v.name as visitor_name, v.company as visitor_company,
                   e.id as employee_uid, e.name as employee_name,
                   e.department as employee_department
            FROM appointments a
            JOIN visitors v ON a.visitor_id = v.id
            JOIN employees e ON a.employee_id = e.id
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            result.push(AppointmentDetails {
                id: row.get("id"),
                purpose: row.get("purpose"),
                visit_date: row.get("visit_date"),
                visit_time: row.get("visit_time"),
                status: row.get("status"),
                approved_at: row.get("approved_at"),
                calendar_blocked: row.get("calendar_blocked"),
                created_at: row.get("created_at"),
                visitor: VisitorShort {
                    id: row.get("visitor_uid"),
                    visitor_id: row.get("visitor_code"),
                    name: row.get("visitor_name"),
                    company: row.get("visitor_company"),
                },
                employee: EmployeeShort {
                    id: row.get("employee_uid"),
                    name: row.get("employee_name"),
                    department: row.get("employee_department"),
                },
            });
        }

        Ok(result)
    }

    /// Count appointments with the given status
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM appointments WHERE status::text = $1",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
