//! Employee Assignment Model

use crate::serde_helpers::{double_option, duration_us, lenient_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One employee's engagement with one assignment
///
/// Serialized with `employee` / `assignment` holding the referenced ids and
/// `duration` rendered as `[D ]HH:MM:SS[.ffffff]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeAssignment {
    pub id: i64,
    #[serde(rename = "employee")]
    pub employee_id: i64,
    #[serde(rename = "assignment")]
    pub assignment_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Signed microseconds, `end_time - start_time`
    #[serde(rename = "duration", with = "duration_us")]
    pub duration_us: Option<i64>,
    pub evaluation_score: Option<f64>,
    pub evaluation_comments: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload
///
/// Fields are optional at the wire level so the missing one can be named
/// in the error; timestamps and score stay raw until validated. Ids may be
/// sent as numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeAssignmentCreate {
    #[serde(default, deserialize_with = "lenient_id")]
    pub employee_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub assignment_id: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub evaluation_score: Option<Value>,
    pub evaluation_comments: Option<String>,
    pub is_completed: Option<bool>,
}

/// Partial update payload
///
/// `end_time` and `evaluation_score` accept an explicit `null` to clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeAssignmentUpdate {
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub evaluation_score: Option<Option<Value>>,
    pub evaluation_comments: Option<String>,
    pub is_completed: Option<bool>,
}

/// Evaluate action payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub evaluation_score: Option<Value>,
    pub evaluation_comments: Option<String>,
}

/// List filter for employee assignments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeAssignmentFilter {
    pub employee_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub is_completed: Option<bool>,
}
