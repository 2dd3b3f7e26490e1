//! Repository for the `timesheets` table.

use sqlx::PgPool;
use tempo_core::types::DbId;

use crate::models::timesheet::{ApplyDecision, IntegrityColumns, Timesheet, TimesheetDetail};

/// Column list for timesheets queries.
const TIMESHEET_COLUMNS: &str = "id, tenant_id, employee_id, project_id, work_date, \
    hours_worked, billable_hours, overtime_hours, description, category, tags, status, \
    rejection_reason, approved_by, approved_at, integrity_hash, integrity_verified, \
    integrity_block_number, integrity_tx_hash, created_at, updated_at";

/// Read and decision-write operations for timesheets.
pub struct TimesheetRepo;

impl TimesheetRepo {
    /// Find a timesheet by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Timesheet>, sqlx::Error> {
        let query = format!(
            "SELECT {TIMESHEET_COLUMNS} FROM timesheets WHERE tenant_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a timesheet joined with its employee (name, manager id) and
    /// optional project name, within a tenant.
    pub async fn find_detail(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<TimesheetDetail>, sqlx::Error> {
        // Columns are inlined (rather than TIMESHEET_COLUMNS) because every
        // column needs the `t.` qualifier in the joined query.
        sqlx::query_as::<_, TimesheetDetail>(
            "SELECT
                t.id, t.tenant_id, t.employee_id, t.project_id, t.work_date,
                t.hours_worked, t.billable_hours, t.overtime_hours, t.description,
                t.category, t.tags, t.status, t.rejection_reason, t.approved_by,
                t.approved_at, t.integrity_hash, t.integrity_verified,
                t.integrity_block_number, t.integrity_tx_hash, t.created_at, t.updated_at,
                e.first_name AS employee_first_name,
                e.last_name AS employee_last_name,
                e.manager_id AS employee_manager_id,
                p.name AS project_name
             FROM timesheets t
             JOIN employees e ON e.id = t.employee_id
             LEFT JOIN projects p ON p.id = t.project_id
             WHERE t.tenant_id = $1 AND t.id = $2",
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Apply an approval or rejection decision.
    ///
    /// The update is conditional on the row still being `submitted`, so of
    /// two racing decisions exactly one wins; the loser gets `None` and
    /// must report an invalid-state error. `approved_at` is set to the
    /// database clock.
    pub async fn apply_decision(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &ApplyDecision,
    ) -> Result<Option<Timesheet>, sqlx::Error> {
        let query = format!(
            "UPDATE timesheets
             SET status = $3,
                 approved_by = $4,
                 approved_at = now(),
                 rejection_reason = $5,
                 updated_at = now()
             WHERE tenant_id = $1 AND id = $2 AND status = 'submitted'
             RETURNING {TIMESHEET_COLUMNS}"
        );
        sqlx::query_as::<_, Timesheet>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.status)
            .bind(input.approved_by)
            .bind(&input.rejection_reason)
            .fetch_optional(pool)
            .await
    }

    /// Write the simulated integrity-ledger columns after a successful
    /// approval.
    pub async fn set_integrity(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &IntegrityColumns,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE timesheets
             SET integrity_hash = $3,
                 integrity_verified = TRUE,
                 integrity_block_number = $4,
                 integrity_tx_hash = $5,
                 updated_at = now()
             WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id)
        .bind(id)
        .bind(&input.integrity_hash)
        .bind(input.integrity_block_number)
        .bind(&input.integrity_tx_hash)
        .execute(pool)
        .await?;
        Ok(())
    }
}
