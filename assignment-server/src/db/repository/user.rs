//! User Repository

use super::{RepoError, RepoResult, UserStore};
use async_trait::async_trait;
use shared::models::{User, UserCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, first_name, last_name, email";

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4) RETURNING id",
        )
        .bind(&data.username)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => {
                RepoError::Duplicate(format!("Username '{}' already exists", data.username))
            }
            other => other,
        })?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create user".into()))
    }
}
