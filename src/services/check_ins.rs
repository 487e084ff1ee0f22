//! Security desk service: visitor lookup, check-in and check-out

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        check_in::{CheckIn, CheckInDetails},
        visitor::Visitor,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CheckInsService {
    repository: Repository,
}

impl CheckInsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Find a visitor by the human-entered visitor code.
    /// An unknown code is a user-facing not-found, nothing is created.
    pub async fn lookup_visitor(&self, code: &str) -> AppResult<Visitor> {
        self.repository
            .visitors
            .get_by_code(code.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("No visitor found with this visitor ID".to_string()))
    }

    /// Check a visitor in against their approved appointment.
    ///
    /// The appointment must be approved; when the visitor has several
    /// approved appointments, the soonest visit is used. The acting security
    /// operator is recorded on the check-in.
    pub async fn check_in(&self, code: &str, security_user_id: Uuid) -> AppResult<CheckIn> {
        let visitor = self.lookup_visitor(code).await?;

        let appointment = self
            .repository
            .appointments
            .next_approved_for_visitor(visitor.id)
            .await?
            .ok_or_else(|| {
                AppError::BusinessRule("No approved appointment found for this visitor".to_string())
            })?;

        self.repository
            .check_ins
            .create(visitor.id, appointment.id, security_user_id)
            .await
    }

    /// Close a check-in. Checking out an already-closed visit returns the
    /// stored record unchanged.
    pub async fn check_out(&self, id: Uuid) -> AppResult<CheckIn> {
        self.repository.check_ins.check_out(id).await
    }

    /// Recent check-ins with visitor and appointment summaries
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<CheckInDetails>> {
        self.repository.check_ins.list_recent(limit).await
    }
}
