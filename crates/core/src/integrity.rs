//! Simulated integrity-ledger record for approved timesheets.
//!
//! After a successful approval the workflow writes a content hash of the
//! approved timesheet plus simulated block/transaction identifiers. This is
//! a cosmetic ledger only: there is no chain linkage and no verification
//! algorithm, and it provides no actual tamper-evidence guarantee.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::hashing::sha256_hex;
use crate::status::STATUS_APPROVED;
use crate::types::{DbId, Timestamp};

/// Canonical content of an approval, hashed into the integrity record.
///
/// Field order is fixed; `serde_json` serializes struct fields in
/// declaration order, so the digest is deterministic for equal content.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityPayload {
    pub timesheet_id: DbId,
    pub employee_id: DbId,
    pub project_id: Option<DbId>,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub billable_hours: f64,
    pub approved_by: DbId,
    pub approved_at: Timestamp,
    pub status: &'static str,
}

impl IntegrityPayload {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timesheet_id: DbId,
        employee_id: DbId,
        project_id: Option<DbId>,
        date: NaiveDate,
        hours_worked: f64,
        billable_hours: f64,
        approved_by: DbId,
        approved_at: Timestamp,
    ) -> Self {
        Self {
            timesheet_id,
            employee_id,
            project_id,
            date,
            hours_worked,
            billable_hours,
            approved_by,
            approved_at,
            status: STATUS_APPROVED,
        }
    }

    /// SHA-256 hex digest of the canonical JSON representation.
    pub fn content_hash(&self) -> String {
        let json = serde_json::to_vec(self).expect("integrity payload serialization is infallible");
        sha256_hex(&json)
    }
}

/// A freshly minted simulated ledger entry.
#[derive(Debug, Clone)]
pub struct SimulatedLedgerEntry {
    pub record_hash: String,
    pub block_number: i64,
    pub tx_hash: String,
}

/// Mint a simulated ledger entry for an approval payload.
///
/// Block number and transaction hash are random, deterministic-looking
/// identifiers; only the record hash is derived from the content.
pub fn mint_ledger_entry(payload: &IntegrityPayload) -> SimulatedLedgerEntry {
    let mut rng = rand::rng();
    let block_number: i64 = rng.random_range(1_000_000..10_000_000);

    let mut nonce = [0u8; 16];
    rng.fill(&mut nonce);
    let tx_hash = format!("0x{}", sha256_hex(&nonce));

    SimulatedLedgerEntry {
        record_hash: payload.content_hash(),
        block_number,
        tx_hash,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn payload() -> IntegrityPayload {
        IntegrityPayload::new(
            10,
            20,
            Some(30),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            8.0,
            6.5,
            40,
            Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn content_hash_is_deterministic() {
        assert_eq!(payload().content_hash(), payload().content_hash());
        assert_eq!(payload().content_hash().len(), 64);
    }

    #[test]
    fn content_hash_changes_with_content() {
        let mut other = payload();
        other.hours_worked = 7.5;
        assert_ne!(payload().content_hash(), other.content_hash());
    }

    #[test]
    fn payload_status_is_always_approved() {
        assert_eq!(payload().status, "approved");
    }

    #[test]
    fn minted_entry_has_plausible_identifiers() {
        let entry = mint_ledger_entry(&payload());
        assert!((1_000_000..10_000_000).contains(&entry.block_number));
        assert!(entry.tx_hash.starts_with("0x"));
        assert_eq!(entry.tx_hash.len(), 66);
        assert_eq!(entry.record_hash, payload().content_hash());
    }
}
