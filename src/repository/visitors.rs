//! Visitors repository for database operations

use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{NewVisitor, Visitor},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get visitor by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Visitor> {
        sqlx::query_as::<_, Visitor>("SELECT * FROM visitors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor with id {} not found", id)))
    }

    /// Get visitor by the human-facing visitor code.
    /// The code is unique, so this matches at most one row.
    pub async fn get_by_code(&self, code: &str) -> AppResult<Option<Visitor>> {
        let visitor = sqlx::query_as::<_, Visitor>(
            "SELECT * FROM visitors WHERE visitor_id = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(visitor)
    }

    /// List all visitors, newest first
    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        let visitors = sqlx::query_as::<_, Visitor>(
            "SELECT * FROM visitors ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(visitors)
    }

    /// Insert a new visitor inside a registration transaction
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        visitor: &NewVisitor,
    ) -> AppResult<Visitor> {
        let created = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (visitor_id, name, email, phone, company, qr_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&visitor.visitor_id)
        .bind(&visitor.name)
        .bind(&visitor.email)
        .bind(&visitor.phone)
        .bind(&visitor.company)
        .bind(&visitor.qr_code)
        .fetch_one(&mut **tx)
        .await?;

        Ok(created)
    }

    /// Count all visitors
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
