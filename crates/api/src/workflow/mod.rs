//! The timesheet approval workflow.
//!
//! [`decide`] runs the full approve/reject sequence: precondition checks
//! (existence, authorization, state machine, rejection reason), the
//! conditional status transition, and the post-mutation side-effect
//! fan-out. The transition is the single source of truth; every side
//! effect is best-effort and individually isolated in
//! [`side_effects`].

pub mod side_effects;

use chrono::NaiveDate;
use serde::Serialize;
use tempo_core::error::CoreError;
use tempo_core::roles;
use tempo_core::status::{self, STATUS_APPROVED};
use tempo_core::types::{DbId, Timestamp};
use tempo_db::models::employee::Employee;
use tempo_db::models::timesheet::{ApplyDecision, DecisionRequest, Timesheet, TimesheetDetail};
use tempo_db::repositories::{EmployeeRepo, TimesheetRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Transformed timesheet returned by the decision endpoint: ids joined to
/// display names, plus the integrity flag.
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetView {
    pub id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub project_id: Option<DbId>,
    pub project_name: Option<String>,
    pub work_date: NaiveDate,
    pub hours_worked: f64,
    pub billable_hours: f64,
    pub overtime_hours: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub approved_by: Option<DbId>,
    pub approved_by_name: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub blockchain_recorded: bool,
}

/// Result of a decision call.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutcome {
    pub timesheet: TimesheetView,
    /// `"approved"` or `"rejected"`.
    pub action: String,
    pub message: String,
    /// Whether the integrity-ledger side effect was attempted (approvals
    /// only; says nothing about its success).
    pub blockchain_recorded: bool,
}

/// Run the approval workflow for one timesheet.
///
/// Precondition failures abort before any mutation and map to their HTTP
/// status via [`crate::error::AppError`]. Once the conditional update has
/// committed, the outcome is success regardless of side-effect failures.
pub async fn decide(
    state: &AppState,
    auth: &AuthUser,
    timesheet_id: DbId,
    input: &DecisionRequest,
) -> AppResult<DecisionOutcome> {
    let detail = TimesheetRepo::find_detail(&state.pool, auth.tenant_id, timesheet_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Timesheet",
            id: timesheet_id,
        })?;

    let actor = EmployeeRepo::find_by_id(&state.pool, auth.tenant_id, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id: auth.user_id,
        })?;

    let policy_actor = roles::Actor {
        id: actor.id,
        role: actor.role.clone(),
    };
    if !roles::can_approve(
        &policy_actor,
        detail.employee_manager_id,
        detail.timesheet.project_id.is_some(),
    ) {
        return Err(CoreError::Forbidden(
            "You are not authorized to approve this timesheet".to_string(),
        )
        .into());
    }

    status::ensure_awaiting_approval(&detail.timesheet.status)?;

    let target = status::decision_target(&input.action);
    status::validate_rejection_reason(target, input.rejection_reason.as_deref())?;

    let approving = target == STATUS_APPROVED;
    let rejection_reason = if approving {
        None
    } else {
        input.rejection_reason.as_deref().map(|r| r.trim().to_string())
    };

    // Core mutation. Conditional on `status = 'submitted'` so a racing
    // decision on the same timesheet cannot be applied twice.
    let apply = ApplyDecision {
        status: target.to_string(),
        approved_by: actor.id,
        rejection_reason: rejection_reason.clone(),
    };
    let updated = TimesheetRepo::apply_decision(&state.pool, auth.tenant_id, timesheet_id, &apply)
        .await?;

    let Some(updated) = updated else {
        // Lost the race: the row left `submitted` between our read and the
        // conditional update. Re-read so the error names the winner's status.
        let current = TimesheetRepo::find_by_id(&state.pool, auth.tenant_id, timesheet_id)
            .await?
            .map(|t| t.status)
            .unwrap_or_else(|| "unknown".to_string());
        return Err(CoreError::InvalidState { current }.into());
    };

    tracing::info!(
        timesheet_id,
        tenant_id = auth.tenant_id,
        approver_id = actor.id,
        action = target,
        "Timesheet decision applied"
    );

    // Side-effect fan-out. The transition above is already durable; from
    // here on every failure is logged and swallowed.
    side_effects::run_all(state, auth.tenant_id, &detail, &updated, &actor, target).await;

    let message = if approving {
        "Timesheet approved successfully".to_string()
    } else {
        "Timesheet rejected".to_string()
    };

    Ok(DecisionOutcome {
        timesheet: build_view(&detail, &updated, &actor, approving),
        action: target.to_string(),
        message,
        blockchain_recorded: approving,
    })
}

/// Shape the updated row into the response view, resolving display names
/// from the pre-fetched detail and the acting approver.
fn build_view(
    detail: &TimesheetDetail,
    updated: &Timesheet,
    actor: &Employee,
    blockchain_recorded: bool,
) -> TimesheetView {
    TimesheetView {
        id: updated.id,
        employee_id: updated.employee_id,
        employee_name: detail.employee_name(),
        project_id: updated.project_id,
        project_name: detail.project_name.clone(),
        work_date: updated.work_date,
        hours_worked: updated.hours_worked,
        billable_hours: updated.billable_hours,
        overtime_hours: updated.overtime_hours,
        description: updated.description.clone(),
        category: updated.category.clone(),
        tags: updated.tags.clone(),
        status: updated.status.clone(),
        rejection_reason: updated.rejection_reason.clone(),
        approved_by: updated.approved_by,
        approved_by_name: Some(actor.display_name()),
        approved_at: updated.approved_at,
        blockchain_recorded,
    }
}
