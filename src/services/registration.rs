//! Pre-registration service

use chrono::NaiveTime;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, NewAppointment},
        visitor::{NewVisitor, RegisterVisitor, Visitor},
    },
    repository::Repository,
    services::{badge::BadgeService, email::EmailService},
};

#[derive(Clone)]
pub struct RegistrationService {
    repository: Repository,
    badge: BadgeService,
    email: EmailService,
}

impl RegistrationService {
    pub fn new(repository: Repository, badge: BadgeService, email: EmailService) -> Self {
        Self { repository, badge, email }
    }

    /// Register a visitor and their appointment.
    ///
    /// The visitor code and QR badge are prepared up front; the visitor and
    /// appointment rows are then written in one transaction, so a failure
    /// partway leaves no orphaned visitor. A confirmation email is sent
    /// best-effort afterwards.
    pub async fn register(&self, request: RegisterVisitor) -> AppResult<(Visitor, Appointment)> {
        let visit_time = parse_visit_time(&request.visit_time)?;

        let employee = self.repository.employees.get_by_id(request.employee_id).await?;

        let code = self.badge.generate_visitor_code();
        let qr_code = self
            .badge
            .render_badge(&code, &request.name, &request.email, &request.phone)?;

        let mut tx = self.repository.pool.begin().await?;

        let visitor = self
            .repository
            .visitors
            .insert(
                &mut tx,
                &NewVisitor {
                    visitor_id: code,
                    name: request.name,
                    email: request.email,
                    phone: request.phone,
                    company: request.company,
                    qr_code,
                },
            )
            .await?;

        let appointment = self
            .repository
            .appointments
            .insert(
                &mut tx,
                &NewAppointment {
                    visitor_id: visitor.id,
                    employee_id: employee.id,
                    purpose: request.purpose,
                    visit_date: request.visit_date,
                    visit_time,
                },
            )
            .await?;

        tx.commit().await?;

        if let Err(e) = self
            .email
            .send_registration_receipt(
                &visitor.email,
                &visitor.name,
                &visitor.visitor_id,
                &employee.name,
                appointment.visit_date,
                appointment.visit_time,
            )
            .await
        {
            tracing::warn!("Failed to send registration receipt to {}: {}", visitor.email, e);
        }

        Ok((visitor, appointment))
    }
}

/// Parse a visit time given as HH:MM or HH:MM:SS
fn parse_visit_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("Invalid visit time: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_with_and_without_seconds() {
        assert_eq!(
            parse_visit_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_visit_time("14:05:30").unwrap(),
            NaiveTime::from_hms_opt(14, 5, 30).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(parse_visit_time("half past nine").is_err());
        assert!(parse_visit_time("25:00").is_err());
        assert!(parse_visit_time("").is_err());
    }
}
