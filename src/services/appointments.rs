//! Appointment moderation service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::appointment::{Appointment, AppointmentDetails},
    repository::Repository,
    services::email::EmailService,
};

#[derive(Clone)]
pub struct AppointmentsService {
    repository: Repository,
    email: EmailService,
}

impl AppointmentsService {
    pub fn new(repository: Repository, email: EmailService) -> Self {
        Self { repository, email }
    }

    /// List all appointments with visitor and employee summaries
    pub async fn list(&self) -> AppResult<Vec<AppointmentDetails>> {
        self.repository.appointments.list_details().await
    }

    /// Approve a pending appointment and notify the visitor best-effort
    pub async fn approve(&self, id: Uuid) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.approve(id, Utc::now()).await?;

        let visitor = self.repository.visitors.get_by_id(appointment.visitor_id).await?;
        if let Err(e) = self
            .email
            .send_approval_notice(
                &visitor.email,
                &visitor.name,
                &visitor.visitor_id,
                appointment.visit_date,
                appointment.visit_time,
            )
            .await
        {
            tracing::warn!("Failed to send approval notice to {}: {}", visitor.email, e);
        }

        Ok(appointment)
    }

    /// Decline a pending appointment and notify the visitor best-effort
    pub async fn decline(&self, id: Uuid) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.decline(id).await?;

        let visitor = self.repository.visitors.get_by_id(appointment.visitor_id).await?;
        if let Err(e) = self
            .email
            .send_decline_notice(&visitor.email, &visitor.name, appointment.visit_date)
            .await
        {
            tracing::warn!("Failed to send decline notice to {}: {}", visitor.email, e);
        }

        Ok(appointment)
    }
}
