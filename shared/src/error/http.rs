//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Clients of this service only distinguish missing resources from
    /// everything else, so conflicts and internal failures share 400.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrganizationNotFound
            | Self::EmployeeNotFound
            | Self::UserNotFound
            | Self::AssignmentNotFound
            | Self::EmployeeAssignmentNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request (validation, conflicts, internal)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
