//! Approval audit-log models.
//!
//! The log is append-only: one entry per approval or rejection decision,
//! never updated or deleted.

use serde::Serialize;
use sqlx::FromRow;
use tempo_core::types::{DbId, Timestamp};

/// A row from the `timesheet_approval_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApprovalLogEntry {
    pub id: DbId,
    pub tenant_id: DbId,
    pub timesheet_id: DbId,
    pub employee_id: DbId,
    pub approver_id: DbId,
    pub action: String,
    pub rejection_reason: Option<String>,
    pub approved_at: Timestamp,
    pub hours_worked: f64,
    pub billable_hours: f64,
    pub overtime_hours: f64,
    pub created_at: Timestamp,
}

/// DTO for appending a log entry.
#[derive(Debug, Clone)]
pub struct CreateApprovalLogEntry {
    pub tenant_id: DbId,
    pub timesheet_id: DbId,
    pub employee_id: DbId,
    pub approver_id: DbId,
    pub action: String,
    pub rejection_reason: Option<String>,
    pub approved_at: Timestamp,
    pub hours_worked: f64,
    pub billable_hours: f64,
    pub overtime_hours: f64,
}

/// A log entry joined with approver and employee display names, as
/// returned by the history endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApprovalLogView {
    pub id: DbId,
    pub timesheet_id: DbId,
    pub action: String,
    pub rejection_reason: Option<String>,
    pub approved_at: Timestamp,
    pub hours_worked: f64,
    pub billable_hours: f64,
    pub overtime_hours: f64,
    pub employee_name: String,
    pub approver_name: String,
}
