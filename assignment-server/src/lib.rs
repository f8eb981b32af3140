//! Assignment Server - organizations, employees and assignment tracking
//!
//! # Architecture
//!
//! - **Registry** (`services`): users, organizations, employees, assignments
//! - **Engine** (`engine`): employee-assignment lifecycle (assign, update,
//!   complete, evaluate) and its invariants
//! - **Database** (`db`): SQLite via sqlx, one repository per entity
//! - **HTTP API** (`api`): axum JSON routes
//!
//! # Module layout
//!
//! ```text
//! assignment-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── engine/        # employee-assignment lifecycle
//! ├── services/      # registry
//! ├── db/            # pool + repositories
//! └── utils/         # logging, time parsing, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod engine;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use engine::EmployeeAssignmentEngine;
pub use services::Registry;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Initialise logging from the configuration
///
/// Production always logs JSON.
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json || config.is_production(),
        config.log_dir.as_deref(),
    );
}

pub fn print_banner() {
    println!(
        r#"
    _            _                                  _
   / \   ___ ___(_) __ _ _ __  _ __ ___   ___ _ __ | |_ ___
  / _ \ / __/ __| |/ _` | '_ \| '_ ` _ \ / _ \ '_ \| __/ __|
 / ___ \\__ \__ \ | (_| | | | | | | | | |  __/ | | | |_\__ \
/_/   \_\___/___/_|\__, |_| |_|_| |_| |_|\___|_| |_|\__|___/
                   |___/
    "#
    );
}
