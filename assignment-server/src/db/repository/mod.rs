//! Repository Module
//!
//! One store trait per entity, each a capability set the services depend
//! on, with a SQLite implementation next to it.

pub mod assignment;
pub mod employee;
pub mod employee_assignment;
pub mod organization;
pub mod user;

// Re-exports
pub use assignment::{AssignmentChanges, AssignmentFilter, AssignmentRepository, NewAssignment};
pub use employee::EmployeeRepository;
pub use employee_assignment::{EmployeeAssignmentRepository, NewEmployeeAssignment};
pub use organization::OrganizationRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use shared::models::{
    Assignment, Employee, EmployeeAssignment,
    EmployeeAssignmentFilter, EmployeeCreate, EmployeeUpdate, Organization, OrganizationCreate,
    OrganizationUpdate, User, UserCreate,
};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::NotFound(format!(
                    "Referenced record does not exist ({})",
                    db_err.message()
                ));
            }
            if db_err.is_check_violation() {
                return RepoError::Validation(db_err.message().to_string());
            }
        }
        if let sqlx::Error::RowNotFound = err {
            return RepoError::NotFound("Row not found".into());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// In-place edit applied to a stored record inside its write transaction
pub type Mutation = Box<dyn FnOnce(&mut EmployeeAssignment) + Send>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;
    async fn create(&self, data: UserCreate) -> RepoResult<User>;
}

#[async_trait]
pub trait OrganizationStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Organization>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Organization>>;
    async fn create(&self, data: OrganizationCreate) -> RepoResult<Organization>;
    async fn update(&self, id: i64, data: OrganizationUpdate) -> RepoResult<Organization>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self, organization_id: Option<i64>) -> RepoResult<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>>;
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Employee>>;
    async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee>;
    async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<Employee>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn find_all(&self, filter: AssignmentFilter) -> RepoResult<Vec<Assignment>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Assignment>>;
    async fn create(&self, data: NewAssignment) -> RepoResult<Assignment>;
    async fn update(&self, id: i64, data: AssignmentChanges) -> RepoResult<Assignment>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait EmployeeAssignmentStore: Send + Sync {
    async fn find_all(
        &self,
        filter: EmployeeAssignmentFilter,
    ) -> RepoResult<Vec<EmployeeAssignment>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmployeeAssignment>>;
    async fn exists_for_pair(&self, employee_id: i64, assignment_id: i64) -> RepoResult<bool>;
    /// Insert a validated record; a duplicate pair yields [`RepoError::Duplicate`]
    async fn insert(&self, data: NewEmployeeAssignment) -> RepoResult<EmployeeAssignment>;
    /// Read-modify-write one record atomically
    async fn modify(&self, id: i64, mutation: Mutation) -> RepoResult<EmployeeAssignment>;
}
