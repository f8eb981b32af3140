//! Data models
//!
//! Shared between assignment-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod assignment;
pub mod employee;
pub mod employee_assignment;
pub mod organization;
pub mod user;

// Re-exports
pub use assignment::*;
pub use employee::*;
pub use employee_assignment::*;
pub use organization::*;
pub use user::*;
