//! Shared types for the assignment service
//!
//! Wire/data models, the unified error system and serde helpers used by
//! the server and its API clients.

pub mod error;
pub mod models;
pub mod serde_helpers;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
