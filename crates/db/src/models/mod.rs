pub mod approval_log;
pub mod employee;
pub mod integrity_record;
pub mod notification;
pub mod timesheet;
