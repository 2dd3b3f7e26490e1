//! Employee row model.
//!
//! Employees are read-only for the approval workflow: they feed the
//! authorization checks and display-name formatting.

use serde::Serialize;
use sqlx::FromRow;
use tempo_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub tenant_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: Option<String>,
    pub manager_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employee {
    /// Display name used in notifications and history views.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        let employee = Employee {
            id: 1,
            tenant_id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: "manager".to_string(),
            department: None,
            manager_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(employee.display_name(), "Ada Lovelace");
    }
}
