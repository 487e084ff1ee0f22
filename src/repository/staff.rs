//! Staff accounts repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{enums::UserRole, staff::StaffUser},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get staff account by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StaffUser> {
        sqlx::query_as::<_, StaffUser>("SELECT * FROM staff_users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff account with id {} not found", id)))
    }

    /// Get staff account by login
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<StaffUser>> {
        let user = sqlx::query_as::<_, StaffUser>(
            "SELECT * FROM staff_users WHERE LOWER(login) = LOWER($1)",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a staff account if the login is free.
    /// Returns None when another instance created it first.
    pub async fn insert_if_absent(
        &self,
        login: &str,
        password_hash: &str,
        display_name: &str,
        role: UserRole,
    ) -> AppResult<Option<StaffUser>> {
        let created = sqlx::query_as::<_, StaffUser>(
            r#"
            INSERT INTO staff_users (login, password_hash, display_name, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (login) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .bind(display_name)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(created)
    }
}
