//! Assignment Model

use super::employee_assignment::EmployeeAssignment;
use super::organization::Organization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assignment status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum AssignmentStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Reviewed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Reviewed => "reviewed",
        }
    }
}

/// Assignment row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub organization_id: i64,
    pub deadline: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assignment with its organization embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub organization: Organization,
    pub deadline: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssignmentDetail {
    pub fn from_parts(assignment: Assignment, organization: Organization) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            description: assignment.description,
            organization,
            deadline: assignment.deadline,
            status: assignment.status,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
        }
    }
}

/// Assignment detail plus the employees assigned to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentWithEmployees {
    #[serde(flatten)]
    pub assignment: AssignmentDetail,
    pub assigned_employees: Vec<EmployeeAssignment>,
}

/// Create assignment payload
///
/// `deadline` stays raw until parsed in the server's time zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub organization_id: i64,
    pub deadline: String,
    #[serde(default)]
    pub status: AssignmentStatus,
}

/// Update assignment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization_id: Option<i64>,
    pub deadline: Option<String>,
    pub status: Option<AssignmentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let json = r#"{"title":"Audit","organization_id":1,"deadline":"2024-06-01T12:00:00"}"#;
        let create: AssignmentCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.deadline, "2024-06-01T12:00:00");
        assert_eq!(create.status, AssignmentStatus::Pending);
        assert_eq!(create.description, "");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(AssignmentStatus::Reviewed.as_str(), "reviewed");
        assert!(serde_json::from_str::<AssignmentStatus>(r#""done""#).is_err());
    }
}
