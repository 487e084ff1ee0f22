//! Employee directory endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee},
};

use super::AuthenticatedStaff;

/// List all employees.
/// Public: the registration form uses it to pick whom to visit.
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees ordered by name", body = Vec<Employee>)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already exists"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(employee): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    employee
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.employees.create(employee).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
