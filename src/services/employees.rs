//! Employee directory service

use crate::{
    error::{AppError, AppResult},
    models::employee::{CreateEmployee, Employee},
    repository::Repository,
};

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
}

impl EmployeesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all employees ordered by name
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.repository.employees.list().await
    }

    /// Create a new employee
    pub async fn create(&self, employee: CreateEmployee) -> AppResult<Employee> {
        if self.repository.employees.email_exists(&employee.email).await? {
            return Err(AppError::Conflict("Employee email already exists".to_string()));
        }

        self.repository.employees.create(&employee).await
    }
}
