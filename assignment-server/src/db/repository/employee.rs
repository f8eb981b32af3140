//! Employee Repository

use super::{EmployeeStore, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::Utc;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, organization_id, employee_type, department, position, joining_date, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_all(&self, organization_id: Option<i64>) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE (?1 IS NULL OR organization_id = ?1) ORDER BY id"
        ))
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE user_id = ? LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO employees (user_id, organization_id, employee_type, department, position, joining_date, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8) RETURNING id",
        )
        .bind(data.user_id)
        .bind(data.organization_id)
        .bind(data.employee_type)
        .bind(&data.department)
        .bind(&data.position)
        .bind(data.joining_date)
        .bind(data.is_active.unwrap_or(true))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
    }

    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
        let rows = sqlx::query(
            "UPDATE employees SET organization_id = COALESCE(?1, organization_id), employee_type = COALESCE(?2, employee_type), department = COALESCE(?3, department), position = COALESCE(?4, position), joining_date = COALESCE(?5, joining_date), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
        )
        .bind(data.organization_id)
        .bind(data.employee_type)
        .bind(data.department)
        .bind(data.position)
        .bind(data.joining_date)
        .bind(data.is_active)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
