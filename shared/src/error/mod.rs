//! Unified error system for the assignment service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body written for failed requests
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Organization errors
//! - 2xxx: Employee / user errors
//! - 3xxx: Assignment errors
//! - 4xxx: Employee-assignment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::AlreadyAssigned);
//!
//! // Create an error with details
//! let err = AppError::validation("Invalid date format")
//!     .with_detail("field", "start_time");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.error, "Invalid date format");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
