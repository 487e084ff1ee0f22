//! Business logic services

pub mod appointments;
pub mod auth;
pub mod badge;
pub mod check_ins;
pub mod email;
pub mod employees;
pub mod registration;
pub mod stats;
pub mod visitors;

use crate::{
    config::{AuthConfig, BadgeConfig, EmailConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub registration: registration::RegistrationService,
    pub appointments: appointments::AppointmentsService,
    pub check_ins: check_ins::CheckInsService,
    pub visitors: visitors::VisitorsService,
    pub employees: employees::EmployeesService,
    pub stats: stats::StatsService,
    pub email: email::EmailService,
    pub badge: badge::BadgeService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        email_config: EmailConfig,
        badge_config: BadgeConfig,
    ) -> Self {
        let email = email::EmailService::new(email_config);
        let badge = badge::BadgeService::new(badge_config);

        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            registration: registration::RegistrationService::new(
                repository.clone(),
                badge.clone(),
                email.clone(),
            ),
            appointments: appointments::AppointmentsService::new(repository.clone(), email.clone()),
            check_ins: check_ins::CheckInsService::new(repository.clone()),
            visitors: visitors::VisitorsService::new(repository.clone()),
            employees: employees::EmployeesService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            email,
            badge,
        }
    }
}
