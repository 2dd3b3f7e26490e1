//! Timesheet row models and the joined detail view used by the approval
//! workflow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tempo_core::types::{DbId, Timestamp};

/// A row from the `timesheets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Timesheet {
    pub id: DbId,
    pub tenant_id: DbId,
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
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
    pub approved_at: Option<Timestamp>,
    pub integrity_hash: Option<String>,
    pub integrity_verified: bool,
    pub integrity_block_number: Option<i64>,
    pub integrity_tx_hash: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A timesheet joined with the names needed by the approval workflow:
/// the employee (plus their manager id for authorization) and the
/// optional project.
#[derive(Debug, Clone, FromRow)]
pub struct TimesheetDetail {
    #[sqlx(flatten)]
    pub timesheet: Timesheet,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub employee_manager_id: Option<DbId>,
    pub project_name: Option<String>,
}

impl TimesheetDetail {
    /// Display name of the timesheet's employee.
    pub fn employee_name(&self) -> String {
        format!("{} {}", self.employee_first_name, self.employee_last_name)
    }
}

/// Column set for an approval/rejection decision, applied conditionally
/// (`WHERE status = 'submitted'`) so exactly one of two racing decisions
/// can win.
#[derive(Debug, Clone)]
pub struct ApplyDecision {
    pub status: String,
    pub approved_by: DbId,
    pub rejection_reason: Option<String>,
}

/// Integrity-ledger columns written after a successful approval.
#[derive(Debug, Clone)]
pub struct IntegrityColumns {
    pub integrity_hash: String,
    pub integrity_block_number: i64,
    pub integrity_tx_hash: String,
}

/// Request body for the decision endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    pub action: String,
    pub rejection_reason: Option<String>,
}
