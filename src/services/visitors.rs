//! Visitor directory service

use crate::{error::AppResult, models::visitor::Visitor, repository::Repository};

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all registered visitors, newest first
    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        self.repository.visitors.list().await
    }
}
