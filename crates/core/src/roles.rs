//! Role constants and the approval authorization policy.

use crate::types::DbId;

/// Tenant administrator. May approve any timesheet in the tenant.
pub const ROLE_ADMIN: &str = "admin";

/// People manager. May approve any timesheet in the tenant.
pub const ROLE_MANAGER: &str = "manager";

/// Project manager. May approve timesheets that are booked to a project.
pub const ROLE_PROJECT_MANAGER: &str = "project_manager";

/// Regular employee. May not approve unless they directly manage the
/// timesheet's employee.
pub const ROLE_EMPLOYEE: &str = "employee";

/// The actor attempting an approval decision.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: DbId,
    pub role: String,
}

/// Whether an actor may approve or reject a given timesheet.
///
/// Any one of the following is sufficient:
/// 1. the actor is an `admin`;
/// 2. the actor is a `manager`;
/// 3. the actor is the direct manager of the timesheet's employee;
/// 4. the actor is a `project_manager` and the timesheet is booked to a
///    project.
pub fn can_approve(actor: &Actor, employee_manager_id: Option<DbId>, has_project: bool) -> bool {
    if actor.role == ROLE_ADMIN || actor.role == ROLE_MANAGER {
        return true;
    }
    if employee_manager_id == Some(actor.id) {
        return true;
    }
    actor.role == ROLE_PROJECT_MANAGER && has_project
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: DbId, role: &str) -> Actor {
        Actor {
            id,
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_can_approve_anything() {
        assert!(can_approve(&actor(1, ROLE_ADMIN), None, false));
    }

    #[test]
    fn manager_can_approve_anything() {
        assert!(can_approve(&actor(1, ROLE_MANAGER), None, false));
    }

    #[test]
    fn direct_manager_can_approve_regardless_of_role() {
        assert!(can_approve(&actor(7, ROLE_EMPLOYEE), Some(7), false));
    }

    #[test]
    fn other_manager_id_does_not_authorize() {
        assert!(!can_approve(&actor(7, ROLE_EMPLOYEE), Some(8), false));
    }

    #[test]
    fn project_manager_needs_a_project() {
        assert!(can_approve(&actor(1, ROLE_PROJECT_MANAGER), None, true));
        assert!(!can_approve(&actor(1, ROLE_PROJECT_MANAGER), None, false));
    }

    #[test]
    fn plain_employee_is_denied() {
        assert!(!can_approve(&actor(1, ROLE_EMPLOYEE), None, true));
        assert!(!can_approve(&actor(1, ROLE_EMPLOYEE), None, false));
    }
}
