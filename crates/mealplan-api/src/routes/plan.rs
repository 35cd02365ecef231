//! # Plan API
//!
//! - `GET /api/plan` — the current Sun–Thu plan
//! - `POST /api/plan` — replace the plan wholesale, body `{"plan": {...}}`
//!
//! Submitted plans are not merged with the stored one and recipe references
//! are not checked.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mealplan_core::{Plan, ValidationError};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to replace the plan.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPlanRequest {
    /// The new plan. Required; `null` counts as missing.
    #[serde(default)]
    pub plan: Option<Plan>,
}

impl Validate for SetPlanRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.plan {
            Some(_) => Ok(()),
            None => Err(ValidationError::PlanRequired),
        }
    }
}

/// Build the plan router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/plan", get(get_plan).post(set_plan))
}

/// GET /api/plan — Current plan.
#[utoipa::path(
    get,
    path = "/api/plan",
    responses(
        (status = 200, description = "Plan keyed by day name", body = Plan),
    ),
    tag = "plan"
)]
pub async fn get_plan(State(state): State<AppState>) -> Result<Json<Plan>, AppError> {
    Ok(Json(state.load()?.plan))
}

/// POST /api/plan — Replace the plan.
#[utoipa::path(
    post,
    path = "/api/plan",
    request_body = SetPlanRequest,
    responses(
        (status = 200, description = "Plan stored", body = Plan),
        (status = 400, description = "plan required", body = crate::error::ErrorBody),
    ),
    tag = "plan"
)]
pub async fn set_plan(
    State(state): State<AppState>,
    body: Result<Json<SetPlanRequest>, JsonRejection>,
) -> Result<Json<Plan>, AppError> {
    let plan = extract_validated_json(body)?
        .plan
        .ok_or(ValidationError::PlanRequired)?;
    let stored = state.update(|doc| {
        doc.plan = plan;
        Ok::<_, AppError>(doc.plan.clone())
    })?;
    tracing::debug!(collection = "plan", "document saved");
    Ok(Json(stored))
}
