//! Visitor directory and security-desk lookup endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::visitor::Visitor};

use super::AuthenticatedStaff;

/// Lookup query for the security desk
#[derive(Deserialize, IntoParams)]
pub struct LookupQuery {
    /// Human-facing visitor code (VIS...)
    pub code: String,
}

/// List all registered visitors
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All visitors, newest first", body = Vec<Visitor>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<Vec<Visitor>>> {
    let visitors = state.services.visitors.list().await?;
    Ok(Json(visitors))
}

/// Look up a visitor by their visitor code
#[utoipa::path(
    get,
    path = "/visitors/lookup",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(LookupQuery),
    responses(
        (status = 200, description = "Matching visitor", body = Visitor),
        (status = 404, description = "No visitor with this code"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn lookup_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.check_ins.lookup_visitor(&query.code).await?;
    Ok(Json(visitor))
}
