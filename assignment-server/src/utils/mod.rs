//! Utility module - shared helpers and types
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - timestamp parsing in the configured zone
//! - [`validation`] - text length limits

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, ErrorBody, ErrorCategory, ErrorCode};
pub use result::AppResult;
