//! Handlers for the timesheet approval workflow.
//!
//! Both endpoints require authentication via [`AuthUser`]; the tenant
//! scope comes from the token's claims.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tempo_core::types::DbId;
use tempo_db::models::approval_log::ApprovalLogView;
use tempo_db::models::timesheet::DecisionRequest;
use tempo_db::repositories::ApprovalLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow;

/// Response body for the history endpoint.
#[derive(Debug, Serialize)]
pub struct ApprovalHistoryResponse {
    pub approval_history: Vec<ApprovalLogView>,
    pub timesheet_id: DbId,
}

/// POST /api/v1/timesheets/{id}/approve
///
/// Apply an approval or rejection decision to a submitted timesheet and
/// fan out the post-decision side effects.
pub async fn decide_timesheet(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(timesheet_id): Path<DbId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = workflow::decide(&state, &auth, timesheet_id, &input).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/timesheets/{id}/approvals
///
/// List the approval history for a timesheet, newest decision first.
/// Returns an empty list (not an error) when no decisions exist.
pub async fn approval_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(timesheet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let approval_history =
        ApprovalLogRepo::list_for_timesheet(&state.pool, auth.tenant_id, timesheet_id).await?;

    Ok(Json(DataResponse {
        data: ApprovalHistoryResponse {
            approval_history,
            timesheet_id,
        },
    }))
}
