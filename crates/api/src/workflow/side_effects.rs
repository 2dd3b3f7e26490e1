//! Best-effort side effects that follow a durable approval decision.
//!
//! Five effects fan out after the status transition commits: the simulated
//! integrity record (approve only), the analytics call, the employee
//! notification, the approval-log entry, and the automation trigger
//! (approve only). Each runs in its own error scope; a failure is logged
//! with the effect's name and never reaches the caller.

use serde_json::json;
use tempo_core::error::CoreError;
use tempo_core::integrity::{mint_ledger_entry, IntegrityPayload};
use tempo_core::status::STATUS_APPROVED;
use tempo_core::types::DbId;
use tempo_db::models::approval_log::CreateApprovalLogEntry;
use tempo_db::models::employee::Employee;
use tempo_db::models::integrity_record::CreateIntegrityRecord;
use tempo_db::models::notification::{
    CreateNotification, KIND_TIMESHEET_APPROVED, KIND_TIMESHEET_REJECTED,
};
use tempo_db::models::timesheet::{IntegrityColumns, Timesheet, TimesheetDetail};
use tempo_db::repositories::{ApprovalLogRepo, IntegrityRecordRepo, NotificationRepo, TimesheetRepo};
use tempo_outbound::{AnalyticsPayload, AutomationPayload};

use crate::state::AppState;

/// Error type covering every side-effect failure mode.
#[derive(Debug, thiserror::Error)]
pub enum SideEffectError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Outbound(#[from] tempo_outbound::OutboundError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Run the full side-effect fan-out for a committed decision.
///
/// Effects run sequentially; each failure is logged and swallowed so one
/// broken collaborator cannot starve the others or fail the response.
pub async fn run_all(
    state: &AppState,
    tenant_id: DbId,
    detail: &TimesheetDetail,
    updated: &Timesheet,
    actor: &Employee,
    action: &str,
) {
    let approving = action == STATUS_APPROVED;

    if approving {
        log_failure(
            "integrity_record",
            updated.id,
            record_integrity(state, tenant_id, updated).await,
        );
    }

    log_failure(
        "analytics",
        updated.id,
        notify_analytics(state, updated, actor.id, action).await,
    );

    log_failure(
        "employee_notification",
        updated.id,
        notify_employee(state, tenant_id, detail, updated, actor).await,
    );

    log_failure(
        "approval_log",
        updated.id,
        append_approval_log(state, tenant_id, updated, actor.id, action).await,
    );

    if approving {
        log_failure(
            "automation",
            updated.id,
            trigger_automation(state, updated).await,
        );
    }
}

/// Log a side-effect failure without propagating it.
fn log_failure(effect: &'static str, timesheet_id: DbId, result: Result<(), SideEffectError>) {
    if let Err(error) = result {
        tracing::error!(effect, timesheet_id, error = %error, "Side effect failed");
    }
}

/// Side effect 1 (approve only): compute the content hash, mint simulated
/// ledger identifiers, persist the integrity record, and stamp the
/// timesheet's integrity columns.
async fn record_integrity(
    state: &AppState,
    tenant_id: DbId,
    updated: &Timesheet,
) -> Result<(), SideEffectError> {
    let approved_by = updated.approved_by.ok_or_else(|| {
        CoreError::Internal("approved timesheet is missing approved_by".to_string())
    })?;
    let approved_at = updated.approved_at.ok_or_else(|| {
        CoreError::Internal("approved timesheet is missing approved_at".to_string())
    })?;

    let payload = IntegrityPayload::new(
        updated.id,
        updated.employee_id,
        updated.project_id,
        updated.work_date,
        updated.hours_worked,
        updated.billable_hours,
        approved_by,
        approved_at,
    );
    let entry = mint_ledger_entry(&payload);

    let create = CreateIntegrityRecord {
        tenant_id,
        timesheet_id: updated.id,
        record_hash: entry.record_hash.clone(),
        block_number: entry.block_number,
        tx_hash: entry.tx_hash.clone(),
        payload: serde_json::to_value(&payload)
            .map_err(|e| CoreError::Internal(e.to_string()))?,
    };
    IntegrityRecordRepo::create(&state.pool, &create).await?;

    let columns = IntegrityColumns {
        integrity_hash: entry.record_hash,
        integrity_block_number: entry.block_number,
        integrity_tx_hash: entry.tx_hash,
    };
    TimesheetRepo::set_integrity(&state.pool, tenant_id, updated.id, &columns).await?;

    Ok(())
}

/// Side effect 2: report the decision to the analytics collaborator.
async fn notify_analytics(
    state: &AppState,
    updated: &Timesheet,
    approver_id: DbId,
    action: &str,
) -> Result<(), SideEffectError> {
    let payload = AnalyticsPayload {
        timesheet_id: updated.id,
        action: action.to_string(),
        approver_id,
        employee_id: updated.employee_id,
        project_id: updated.project_id,
    };
    state.outbound.notify_analytics(&payload).await?;
    Ok(())
}

/// Side effect 3: insert an in-app notification for the timesheet's
/// employee.
async fn notify_employee(
    state: &AppState,
    tenant_id: DbId,
    detail: &TimesheetDetail,
    updated: &Timesheet,
    actor: &Employee,
) -> Result<(), SideEffectError> {
    let approver_name = actor.display_name();
    let approving = updated.status == STATUS_APPROVED;

    let (kind, title, message) = if approving {
        (
            KIND_TIMESHEET_APPROVED,
            "Timesheet approved".to_string(),
            format!(
                "Your timesheet for {} was approved by {approver_name}",
                updated.work_date
            ),
        )
    } else {
        let reason = updated.rejection_reason.as_deref().unwrap_or("no reason given");
        (
            KIND_TIMESHEET_REJECTED,
            "Timesheet rejected".to_string(),
            format!(
                "Your timesheet for {} was rejected by {approver_name}: {reason}",
                updated.work_date
            ),
        )
    };

    let create = CreateNotification {
        tenant_id,
        user_id: updated.employee_id,
        kind: kind.to_string(),
        title,
        message,
        data: json!({
            "timesheet_id": updated.id,
            "project_name": detail.project_name,
            "date": updated.work_date,
            "hours_worked": updated.hours_worked,
            "approved_by": approver_name,
            "rejection_reason": updated.rejection_reason,
        }),
    };
    NotificationRepo::create(&state.pool, &create).await?;
    Ok(())
}

/// Side effect 4: append the audit-log entry.
///
/// Attempted for both approvals and rejections. Deliberately fire-and-forget
/// like the other effects; see DESIGN.md for the durability discussion.
async fn append_approval_log(
    state: &AppState,
    tenant_id: DbId,
    updated: &Timesheet,
    approver_id: DbId,
    action: &str,
) -> Result<(), SideEffectError> {
    let approved_at = updated.approved_at.ok_or_else(|| {
        CoreError::Internal("decided timesheet is missing approved_at".to_string())
    })?;

    let create = CreateApprovalLogEntry {
        tenant_id,
        timesheet_id: updated.id,
        employee_id: updated.employee_id,
        approver_id,
        action: action.to_string(),
        rejection_reason: updated.rejection_reason.clone(),
        approved_at,
        hours_worked: updated.hours_worked,
        billable_hours: updated.billable_hours,
        overtime_hours: updated.overtime_hours,
    };
    ApprovalLogRepo::create(&state.pool, &create).await?;
    Ok(())
}

/// Side effect 5 (approve only): trigger the downstream automation
/// collaborator.
async fn trigger_automation(state: &AppState, updated: &Timesheet) -> Result<(), SideEffectError> {
    let payload = AutomationPayload {
        timesheet_id: updated.id,
        employee_id: updated.employee_id,
        project_id: updated.project_id,
        hours_worked: updated.hours_worked,
        billable_hours: updated.billable_hours,
    };
    state.outbound.trigger_automation(&payload).await?;
    Ok(())
}
