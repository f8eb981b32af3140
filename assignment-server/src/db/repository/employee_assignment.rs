//! Employee Assignment Repository
//!
//! Writes run inside one transaction per record. `modify` first touches the
//! row so the SQLite write lock is held before the read, which serializes
//! concurrent read-modify-write cycles on the same record.

use super::{EmployeeAssignmentStore, Mutation, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{EmployeeAssignment, EmployeeAssignmentFilter};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, assignment_id, start_time, end_time, duration_us, evaluation_score, evaluation_comments, is_completed, created_at, updated_at";

/// Validated record ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployeeAssignment {
    pub employee_id: i64,
    pub assignment_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_us: Option<i64>,
    pub evaluation_score: Option<f64>,
    pub evaluation_comments: String,
    pub is_completed: bool,
}

#[derive(Clone)]
pub struct EmployeeAssignmentRepository {
    pool: SqlitePool,
}

impl EmployeeAssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeAssignmentStore for EmployeeAssignmentRepository {
    async fn find_all(
        &self,
        filter: EmployeeAssignmentFilter,
    ) -> RepoResult<Vec<EmployeeAssignment>> {
        let records = sqlx::query_as::<_, EmployeeAssignment>(&format!(
            "SELECT {COLUMNS} FROM employee_assignments WHERE (?1 IS NULL OR employee_id = ?1) AND (?2 IS NULL OR assignment_id = ?2) AND (?3 IS NULL OR is_completed = ?3) ORDER BY id"
        ))
        .bind(filter.employee_id)
        .bind(filter.assignment_id)
        .bind(filter.is_completed)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmployeeAssignment>> {
        let record = sqlx::query_as::<_, EmployeeAssignment>(&format!(
            "SELECT {COLUMNS} FROM employee_assignments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn exists_for_pair(&self, employee_id: i64, assignment_id: i64) -> RepoResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employee_assignments WHERE employee_id = ? AND assignment_id = ?",
        )
        .bind(employee_id)
        .bind(assignment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn insert(&self, data: NewEmployeeAssignment) -> RepoResult<EmployeeAssignment> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, EmployeeAssignment>(&format!(
            "INSERT INTO employee_assignments (employee_id, assignment_id, start_time, end_time, duration_us, evaluation_score, evaluation_comments, is_completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) RETURNING {COLUMNS}"
        ))
        .bind(data.employee_id)
        .bind(data.assignment_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.duration_us)
        .bind(data.evaluation_score)
        .bind(&data.evaluation_comments)
        .bind(data.is_completed)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => RepoError::Duplicate(format!(
                "Employee {} is already assigned to assignment {}",
                data.employee_id, data.assignment_id
            )),
            other => other,
        })?;
        Ok(record)
    }

    async fn modify(&self, id: i64, mutation: Mutation) -> RepoResult<EmployeeAssignment> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        // Take the write lock before reading
        let rows = sqlx::query("UPDATE employee_assignments SET updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Employee assignment {id} not found"
            )));
        }

        let mut record = sqlx::query_as::<_, EmployeeAssignment>(&format!(
            "SELECT {COLUMNS} FROM employee_assignments WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        mutation(&mut record);

        sqlx::query(
            "UPDATE employee_assignments SET start_time = ?1, end_time = ?2, duration_us = ?3, evaluation_score = ?4, evaluation_comments = ?5, is_completed = ?6 WHERE id = ?7",
        )
        .bind(record.start_time)
        .bind(record.end_time)
        .bind(record.duration_us)
        .bind(record.evaluation_score)
        .bind(&record.evaluation_comments)
        .bind(record.is_completed)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }
}
