//! Unified error codes for the assignment service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Organization errors
//! - 2xxx: Employee / user errors
//! - 3xxx: Assignment errors
//! - 4xxx: Employee-assignment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Request body is not valid JSON
    InvalidJson = 9,

    // ==================== 1xxx: Organization ====================
    /// Organization not found
    OrganizationNotFound = 1001,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,
    /// User not found
    UserNotFound = 2002,
    /// User already has an employee record
    UserAlreadyEmployed = 2003,
    /// Username already taken
    UsernameExists = 2004,

    // ==================== 3xxx: Assignment ====================
    /// Assignment not found
    AssignmentNotFound = 3001,

    // ==================== 4xxx: Employee Assignment ====================
    /// Employee-assignment record not found
    EmployeeAssignmentNotFound = 4001,
    /// Employee is already assigned to the assignment
    AlreadyAssigned = 4002,
    /// Timestamp could not be parsed
    InvalidDateFormat = 4003,
    /// Evaluation score outside [0, 5]
    ScoreOutOfRange = 4004,
    /// Evaluation score missing
    ScoreRequired = 4005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::InvalidJson => "Invalid JSON format",

            // Organization
            ErrorCode::OrganizationNotFound => "Organization not found",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserAlreadyEmployed => "User already has an employee record",
            ErrorCode::UsernameExists => "Username already exists",

            // Assignment
            ErrorCode::AssignmentNotFound => "Assignment not found",

            // Employee Assignment
            ErrorCode::EmployeeAssignmentNotFound => "Employee assignment not found",
            ErrorCode::AlreadyAssigned => "Employee is already assigned to this assignment",
            ErrorCode::InvalidDateFormat => "Invalid date format",
            ErrorCode::ScoreOutOfRange => "Evaluation score must be between 0 and 5",
            ErrorCode::ScoreRequired => "Evaluation score is required",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::InvalidJson),

            // Organization
            1001 => Ok(ErrorCode::OrganizationNotFound),

            // Employee
            2001 => Ok(ErrorCode::EmployeeNotFound),
            2002 => Ok(ErrorCode::UserNotFound),
            2003 => Ok(ErrorCode::UserAlreadyEmployed),
            2004 => Ok(ErrorCode::UsernameExists),

            // Assignment
            3001 => Ok(ErrorCode::AssignmentNotFound),

            // Employee Assignment
            4001 => Ok(ErrorCode::EmployeeAssignmentNotFound),
            4002 => Ok(ErrorCode::AlreadyAssigned),
            4003 => Ok(ErrorCode::InvalidDateFormat),
            4004 => Ok(ErrorCode::ScoreOutOfRange),
            4005 => Ok(ErrorCode::ScoreRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
