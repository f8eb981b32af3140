//! Assignment Repository

use super::{AssignmentStore, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{Assignment, AssignmentStatus};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, title, description, organization_id, deadline, status, created_at, updated_at";

/// Optional predicates for listing assignments
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub organization_id: Option<i64>,
    pub status: Option<AssignmentStatus>,
}

/// Validated assignment ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub organization_id: i64,
    pub deadline: DateTime<Utc>,
    pub status: AssignmentStatus,
}

/// Validated partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization_id: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: Option<AssignmentStatus>,
}

#[derive(Clone)]
pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for AssignmentRepository {
    async fn find_all(&self, filter: AssignmentFilter) -> RepoResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(&format!(
            "SELECT {COLUMNS} FROM assignments WHERE (?1 IS NULL OR organization_id = ?1) AND (?2 IS NULL OR status = ?2) ORDER BY id"
        ))
        .bind(filter.organization_id)
        .bind(filter.status)
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Assignment>> {
        let assignment = sqlx::query_as::<_, Assignment>(&format!(
            "SELECT {COLUMNS} FROM assignments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(assignment)
    }

    async fn create(&self, data: NewAssignment) -> RepoResult<Assignment> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO assignments (title, description, organization_id, deadline, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) RETURNING id",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.organization_id)
        .bind(data.deadline)
        .bind(data.status)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create assignment".into()))
    }

    async fn update(&self, id: i64, data: AssignmentChanges) -> RepoResult<Assignment> {
        let rows = sqlx::query(
            "UPDATE assignments SET title = COALESCE(?1, title), description = COALESCE(?2, description), organization_id = COALESCE(?3, organization_id), deadline = COALESCE(?4, deadline), status = COALESCE(?5, status), updated_at = ?6 WHERE id = ?7",
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.organization_id)
        .bind(data.deadline)
        .bind(data.status)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Assignment {id} not found")));
        }
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Assignment {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
