use std::sync::Arc;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{
    AssignmentRepository, EmployeeAssignmentRepository, EmployeeRepository,
    OrganizationRepository, UserRepository,
};
use crate::engine::EmployeeAssignmentEngine;
use crate::services::Registry;

/// Server state - shared references handed to every handler
///
/// Cloning is cheap: the pool and the stores are reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | db | SQLite pool |
/// | registry | organizations, employees, assignments, users |
/// | engine | employee-assignment lifecycle |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub registry: Registry,
    pub engine: EmployeeAssignmentEngine,
}

impl ServerState {
    /// Open the configured database and wire the services
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// State over a fresh in-memory database
    pub async fn for_tests() -> Result<Self> {
        let db = DbService::in_memory()
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        Ok(Self::with_db(Config::for_tests(), db))
    }

    pub fn with_db(config: Config, db: DbService) -> Self {
        let pool = db.pool.clone();
        let assignments_store = Arc::new(EmployeeAssignmentRepository::new(pool.clone()));

        let registry = Registry::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(OrganizationRepository::new(pool.clone())),
            Arc::new(EmployeeRepository::new(pool.clone())),
            Arc::new(AssignmentRepository::new(pool)),
            config.time_zone,
        );
        let engine =
            EmployeeAssignmentEngine::new(registry.clone(), assignments_store, config.time_zone);

        Self {
            config,
            db,
            registry,
            engine,
        }
    }
}
