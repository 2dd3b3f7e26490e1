//! Route definitions for the timesheet approval workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::approval;
use crate::state::AppState;

/// Timesheet-scoped approval routes, nested under `/timesheets`.
///
/// ```text
/// POST   /{id}/approve      decide_timesheet
/// GET    /{id}/approvals    approval_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/approve", post(approval::decide_timesheet))
        .route("/{id}/approvals", get(approval::approval_history))
}
