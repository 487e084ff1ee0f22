//! Staff authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::enums::UserRole};

use super::AuthenticatedStaff;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Staff account summary returned after login
#[derive(Serialize, ToSchema)]
pub struct StaffInfo {
    pub id: Uuid,
    pub login: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Login response with JWT token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub user: StaffInfo,
}

/// Authenticate a staff account
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid login or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state
        .services
        .auth
        .authenticate(&request.login, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user: StaffInfo {
            id: user.id,
            login: user.login,
            display_name: user.display_name,
            role: user.role,
        },
    }))
}

/// Get the authenticated staff account
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current staff account", body = StaffInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
) -> AppResult<Json<StaffInfo>> {
    let user = state.services.auth.get_by_id(claims.staff_id).await?;

    Ok(Json(StaffInfo {
        id: user.id,
        login: user.login,
        display_name: user.display_name,
        role: user.role,
    }))
}
