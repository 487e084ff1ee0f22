//! Dashboard statistics service

use crate::{
    api::stats::{AppointmentBreakdown, StatsResponse},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Aggregate the dashboard counters
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let total_visitors = self.repository.visitors.count().await?;
        let total_employees = self.repository.employees.count().await?;
        let checked_in_now = self.repository.check_ins.count_open().await?;

        let appointments = AppointmentBreakdown {
            pending: self.repository.appointments.count_by_status("pending").await?,
            approved: self.repository.appointments.count_by_status("approved").await?,
            declined: self.repository.appointments.count_by_status("declined").await?,
            completed: self.repository.appointments.count_by_status("completed").await?,
        };

        Ok(StatsResponse {
            total_visitors,
            total_employees,
            pending_appointments: appointments.pending,
            checked_in_now,
            appointments,
        })
    }
}
