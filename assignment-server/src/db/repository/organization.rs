//! Organization Repository

use super::{OrganizationStore, RepoError, RepoResult};
use async_trait::async_trait;
use chrono::Utc;
use shared::models::{Organization, OrganizationCreate, OrganizationUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, address, created_at, updated_at";

#[derive(Clone)]
pub struct OrganizationRepository {
    pool: SqlitePool,
}

impl OrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationStore for OrganizationRepository {
    async fn find_all(&self) -> RepoResult<Vec<Organization>> {
        let orgs = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {COLUMNS} FROM organizations ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(orgs)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Organization>> {
        let org = sqlx::query_as::<_, Organization>(&format!(
            "SELECT {COLUMNS} FROM organizations WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(org)
    }

    async fn create(&self, data: OrganizationCreate) -> RepoResult<Organization> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO organizations (name, description, address, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create organization".into()))
    }

    async fn update(&self, id: i64, data: OrganizationUpdate) -> RepoResult<Organization> {
        let rows = sqlx::query(
            "UPDATE organizations SET name = COALESCE(?1, name), description = COALESCE(?2, description), address = COALESCE(?3, address), updated_at = ?4 WHERE id = ?5",
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.address)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Organization {id} not found")));
        }
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Organization {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM organizations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
