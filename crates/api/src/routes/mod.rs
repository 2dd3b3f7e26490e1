pub mod approval;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /timesheets/{id}/approve      apply an approval/rejection decision (POST)
/// /timesheets/{id}/approvals    approval history (GET)
///
/// /notifications                list the caller's notifications (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/timesheets", approval::router())
        .nest("/notifications", notification::router())
}
