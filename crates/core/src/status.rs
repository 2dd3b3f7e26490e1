//! Timesheet status constants and state-machine rules.
//!
//! A timesheet moves `draft -> submitted -> approved | rejected`. Only the
//! `submitted -> approved` and `submitted -> rejected` transitions belong to
//! the approval workflow; `approved` and `rejected` are terminal.

use crate::error::CoreError;

/// Timesheet is still being edited by the employee.
pub const STATUS_DRAFT: &str = "draft";

/// Timesheet has been submitted and is awaiting an approval decision.
pub const STATUS_SUBMITTED: &str = "submitted";

/// Timesheet was approved. Terminal.
pub const STATUS_APPROVED: &str = "approved";

/// Timesheet was rejected. Terminal.
pub const STATUS_REJECTED: &str = "rejected";

/// Action string that selects the approval branch. Any other action is
/// treated as rejection intent (gated by the rejection-reason requirement).
pub const ACTION_APPROVE: &str = "approve";

/// The approval workflow only ever operates on `submitted` timesheets.
/// Returns `InvalidState` (with the offending status in the message) for
/// anything else, including the terminal states.
pub fn ensure_awaiting_approval(current: &str) -> Result<(), CoreError> {
    if current == STATUS_SUBMITTED {
        Ok(())
    } else {
        Err(CoreError::InvalidState {
            current: current.to_string(),
        })
    }
}

/// Resolve the target status for a decision action.
///
/// `"approve"` maps to `approved`; everything else is rejection intent and
/// maps to `rejected`.
pub fn decision_target(action: &str) -> &'static str {
    if action == ACTION_APPROVE {
        STATUS_APPROVED
    } else {
        STATUS_REJECTED
    }
}

/// Validate the rejection reason for a rejection decision.
///
/// The reason must be present and non-empty after trimming. Approvals never
/// require a reason.
pub fn validate_rejection_reason(
    target_status: &str,
    reason: Option<&str>,
) -> Result<(), CoreError> {
    if target_status != STATUS_REJECTED {
        return Ok(());
    }
    match reason {
        Some(r) if !r.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(
            "A rejection reason is required when rejecting a timesheet".to_string(),
        )),
    }
}
