//! Simulated integrity-ledger row models.

use serde::Serialize;
use sqlx::FromRow;
use tempo_core::types::{DbId, Timestamp};

/// A row from the `timesheet_integrity_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IntegrityRecord {
    pub id: DbId,
    pub tenant_id: DbId,
    pub timesheet_id: DbId,
    pub record_hash: String,
    pub block_number: i64,
    pub tx_hash: String,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for inserting an integrity record.
#[derive(Debug, Clone)]
pub struct CreateIntegrityRecord {
    pub tenant_id: DbId,
    pub timesheet_id: DbId,
    pub record_hash: String,
    pub block_number: i64,
    pub tx_hash: String,
    pub payload: serde_json::Value,
}
