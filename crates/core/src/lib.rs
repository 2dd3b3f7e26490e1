//! Domain logic for the timesheet approval workflow.
//!
//! Pure, I/O-free building blocks shared by the DB and API layers:
//! status state machine, authorization policy, integrity-hash
//! computation, and the shared error type.

pub mod error;
pub mod hashing;
pub mod integrity;
pub mod roles;
pub mod status;
pub mod types;
