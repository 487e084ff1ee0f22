//! Staff authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{enums::UserRole, staff::StaffClaims, staff::StaffUser},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a staff account by login and return a JWT token
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<(String, StaffUser)> {
        let user = self
            .repository
            .staff
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login or password".to_string()))?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication("Invalid login or password".to_string()));
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Create a JWT token for a staff account
    fn create_token(&self, user: &StaffUser) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = StaffClaims {
            sub: user.login.clone(),
            staff_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Get staff account by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StaffUser> {
        self.repository.staff.get_by_id(id).await
    }

    /// Verify a password against the stored argon2 hash
    fn verify_password(&self, user: &StaffUser, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Ensure the bootstrap admin account from configuration exists.
    /// A concurrent instance winning the insert is fine; the account is there
    /// either way.
    pub async fn ensure_bootstrap_admin(&self) -> AppResult<()> {
        if self
            .repository
            .staff
            .get_by_login(&self.config.bootstrap_login)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash = self.hash_password(&self.config.bootstrap_password)?;
        let created = self
            .repository
            .staff
            .insert_if_absent(
                &self.config.bootstrap_login,
                &hash,
                "Administrator",
                UserRole::Admin,
            )
            .await?;

        if created.is_some() {
            tracing::info!("Created bootstrap admin account '{}'", self.config.bootstrap_login);
        }

        Ok(())
    }
}
