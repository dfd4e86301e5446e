//! Axum route handlers for the Planner API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::student::StudentProfile;
use crate::planner::service::{PlanOutcome, PlanResult, NO_PLAN_FOUND};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// Substring of the plan name to match; falls back to `PLAN_NAME_PATTERN`.
    pub plan: Option<String>,
}

/// POST /api/v1/planner/generate
///
/// Body is the student profile. Returns the recommended schedule, or 404 when
/// no degree plan matches.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<PlanResult>, AppError> {
    let pattern = query.plan.as_deref().map(str::trim).filter(|p| !p.is_empty());

    match state.planner.generate_plan(profile, pattern).await? {
        PlanOutcome::Generated(result) => Ok(Json(result)),
        PlanOutcome::NotFound => Err(AppError::NotFound(NO_PLAN_FOUND.to_string())),
    }
}
