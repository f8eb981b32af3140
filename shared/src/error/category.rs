//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Organization errors
/// - 2xxx: Employee / user errors
/// - 3xxx: Assignment errors
/// - 4xxx: Employee-assignment errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Organization errors (1xxx)
    Organization,
    /// Employee / user errors (2xxx)
    Employee,
    /// Assignment errors (3xxx)
    Assignment,
    /// Employee-assignment errors (4xxx)
    EmployeeAssignment,
    /// System errors (9xxx and anything unclassified)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Organization,
            2000..3000 => Self::Employee,
            3000..4000 => Self::Assignment,
            4000..5000 => Self::EmployeeAssignment,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Organization => "organization",
            Self::Employee => "employee",
            Self::Assignment => "assignment",
            Self::EmployeeAssignment => "employee_assignment",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
