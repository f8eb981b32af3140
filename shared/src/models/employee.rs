//! Employee Model

use super::employee_assignment::EmployeeAssignment;
use super::organization::Organization;
use super::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Employment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum EmployeeType {
    Intern,
    FullTime,
}

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub user_id: i64,
    pub organization_id: i64,
    pub employee_type: EmployeeType,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee with user and organization embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetail {
    pub id: i64,
    pub user: User,
    pub organization: Organization,
    pub employee_type: EmployeeType,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeDetail {
    pub fn from_parts(employee: Employee, user: User, organization: Organization) -> Self {
        Self {
            id: employee.id,
            user,
            organization,
            employee_type: employee.employee_type,
            department: employee.department,
            position: employee.position,
            joining_date: employee.joining_date,
            is_active: employee.is_active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Employee detail plus the assignments the employee works on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWithAssignments {
    #[serde(flatten)]
    pub employee: EmployeeDetail,
    pub assignments: Vec<EmployeeAssignment>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub user_id: i64,
    pub organization_id: i64,
    pub employee_type: EmployeeType,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    pub is_active: Option<bool>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub organization_id: Option<i64>,
    pub employee_type: Option<EmployeeType>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}
