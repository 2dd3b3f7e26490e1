//! Repository for the `employees` table.

use sqlx::PgPool;
use tempo_core::types::DbId;

use crate::models::employee::Employee;

/// Column list for employees queries.
const EMPLOYEE_COLUMNS: &str = "id, tenant_id, first_name, last_name, email, role, \
    department, manager_id, created_at, updated_at";

/// Read operations for employees. The approval workflow never mutates
/// employee records.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an employee by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE tenant_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
