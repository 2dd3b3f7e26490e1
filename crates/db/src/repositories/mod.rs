//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method takes a tenant id
//! and filters on it.

pub mod approval_log_repo;
pub mod employee_repo;
pub mod integrity_record_repo;
pub mod notification_repo;
pub mod timesheet_repo;

pub use approval_log_repo::ApprovalLogRepo;
pub use employee_repo::EmployeeRepo;
pub use integrity_record_repo::IntegrityRecordRepo;
pub use notification_repo::NotificationRepo;
pub use timesheet_repo::TimesheetRepo;
