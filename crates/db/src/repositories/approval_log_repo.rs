//! Repository for the `timesheet_approval_log` table.
//!
//! The log is append-only; there are no update or delete operations.

use sqlx::PgPool;
use tempo_core::types::DbId;

use crate::models::approval_log::{ApprovalLogEntry, ApprovalLogView, CreateApprovalLogEntry};

/// Column list for approval-log queries.
const LOG_COLUMNS: &str = "id, tenant_id, timesheet_id, employee_id, approver_id, action, \
    rejection_reason, approved_at, hours_worked, billable_hours, overtime_hours, created_at";

/// Append and history-read operations for the approval audit trail.
pub struct ApprovalLogRepo;

impl ApprovalLogRepo {
    /// Append one log entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApprovalLogEntry,
    ) -> Result<ApprovalLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO timesheet_approval_log
                (tenant_id, timesheet_id, employee_id, approver_id, action,
                 rejection_reason, approved_at, hours_worked, billable_hours, overtime_hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {LOG_COLUMNS}"
        );
        sqlx::query_as::<_, ApprovalLogEntry>(&query)
            .bind(input.tenant_id)
            .bind(input.timesheet_id)
            .bind(input.employee_id)
            .bind(input.approver_id)
            .bind(&input.action)
            .bind(&input.rejection_reason)
            .bind(input.approved_at)
            .bind(input.hours_worked)
            .bind(input.billable_hours)
            .bind(input.overtime_hours)
            .fetch_one(pool)
            .await
    }

    /// List the approval history for a timesheet with approver and employee
    /// names resolved, ordered by `approved_at` descending.
    pub async fn list_for_timesheet(
        pool: &PgPool,
        tenant_id: DbId,
        timesheet_id: DbId,
    ) -> Result<Vec<ApprovalLogView>, sqlx::Error> {
        sqlx::query_as::<_, ApprovalLogView>(
            "SELECT
                l.id, l.timesheet_id, l.action, l.rejection_reason, l.approved_at,
                l.hours_worked, l.billable_hours, l.overtime_hours,
                e.first_name || ' ' || e.last_name AS employee_name,
                a.first_name || ' ' || a.last_name AS approver_name
             FROM timesheet_approval_log l
             JOIN employees e ON e.id = l.employee_id
             JOIN employees a ON a.id = l.approver_id
             WHERE l.tenant_id = $1 AND l.timesheet_id = $2
             ORDER BY l.approved_at DESC",
        )
        .bind(tenant_id)
        .bind(timesheet_id)
        .fetch_all(pool)
        .await
    }
}
