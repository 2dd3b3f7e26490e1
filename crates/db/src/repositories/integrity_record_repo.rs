//! Repository for the `timesheet_integrity_records` table.

use sqlx::PgPool;

use crate::models::integrity_record::{CreateIntegrityRecord, IntegrityRecord};

/// Column list for integrity-record queries.
const RECORD_COLUMNS: &str =
    "id, tenant_id, timesheet_id, record_hash, block_number, tx_hash, payload, created_at";

/// Insert and read operations for the simulated integrity ledger.
pub struct IntegrityRecordRepo;

impl IntegrityRecordRepo {
    /// Insert an integrity record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIntegrityRecord,
    ) -> Result<IntegrityRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO timesheet_integrity_records
                (tenant_id, timesheet_id, record_hash, block_number, tx_hash, payload)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RECORD_COLUMNS}"
        );
        sqlx::query_as::<_, IntegrityRecord>(&query)
            .bind(input.tenant_id)
            .bind(input.timesheet_id)
            .bind(&input.record_hash)
            .bind(input.block_number)
            .bind(&input.tx_hash)
            .bind(&input.payload)
            .fetch_one(pool)
            .await
    }
}
