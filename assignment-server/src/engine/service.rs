use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use shared::models::{
    EmployeeAssignment, EmployeeAssignmentCreate, EmployeeAssignmentFilter,
    EmployeeAssignmentUpdate, EvaluationRequest,
};

use super::rules::{ScoreError, derive_duration, parse_score};
use crate::db::repository::{EmployeeAssignmentStore, Mutation, NewEmployeeAssignment, RepoError};
use crate::services::Registry;
use crate::utils::time::parse_timestamp_field;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

const MISSING_REFERENCE: &str = "Employee or Assignment not found";
const SCORE_NOT_NUMBER: &str = "Evaluation score must be a number between 0 and 5";

#[derive(Clone)]
pub struct EmployeeAssignmentEngine {
    registry: Registry,
    store: Arc<dyn EmployeeAssignmentStore>,
    time_zone: Tz,
}

impl std::fmt::Debug for EmployeeAssignmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeAssignmentEngine")
            .field("time_zone", &self.time_zone)
            .finish_non_exhaustive()
    }
}

fn record_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeAssignmentNotFound,
        format!("Employee assignment {id} not found"),
    )
}

fn already_assigned(employee_id: i64, assignment_id: i64) -> AppError {
    AppError::new(ErrorCode::AlreadyAssigned)
        .with_detail("employee_id", employee_id)
        .with_detail("assignment_id", assignment_id)
}

/// Score error for create / update payloads
fn score_error(err: ScoreError) -> AppError {
    let err = match err {
        ScoreError::OutOfRange => AppError::new(ErrorCode::ScoreOutOfRange),
        ScoreError::NotNumber => AppError::with_message(ErrorCode::ScoreOutOfRange, SCORE_NOT_NUMBER),
    };
    err.with_detail("field", "evaluation_score")
}

impl EmployeeAssignmentEngine {
    pub fn new(registry: Registry, store: Arc<dyn EmployeeAssignmentStore>, time_zone: Tz) -> Self {
        Self {
            registry,
            store,
            time_zone,
        }
    }

    fn parse_time(&self, raw: &str, field: &str) -> AppResult<DateTime<Utc>> {
        parse_timestamp_field(raw, self.time_zone, field)
    }

    /// Score from a create / update payload; JSON null means no score
    fn optional_score(raw: Option<&Value>) -> AppResult<Option<f64>> {
        match raw {
            None | Some(Value::Null) => Ok(None),
            Some(v) => parse_score(v).map(Some).map_err(score_error),
        }
    }

    // ==================== Queries ====================

    pub async fn get(&self, id: i64) -> AppResult<EmployeeAssignment> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(id))
    }

    pub async fn list(&self, filter: EmployeeAssignmentFilter) -> AppResult<Vec<EmployeeAssignment>> {
        Ok(self.store.find_all(filter).await?)
    }

    pub async fn list_by_employee(
        &self,
        employee_id: i64,
        is_completed: Option<bool>,
    ) -> AppResult<Vec<EmployeeAssignment>> {
        self.list(EmployeeAssignmentFilter {
            employee_id: Some(employee_id),
            assignment_id: None,
            is_completed,
        })
        .await
    }

    pub async fn list_by_assignment(
        &self,
        assignment_id: i64,
        is_completed: Option<bool>,
    ) -> AppResult<Vec<EmployeeAssignment>> {
        self.list(EmployeeAssignmentFilter {
            employee_id: None,
            assignment_id: Some(assignment_id),
            is_completed,
        })
        .await
    }

    // ==================== Mutations ====================

    /// Assign an employee to an assignment
    pub async fn create(&self, data: EmployeeAssignmentCreate) -> AppResult<EmployeeAssignment> {
        let employee_id = data
            .employee_id
            .ok_or_else(|| AppError::required_field("employee_id"))?;
        let assignment_id = data
            .assignment_id
            .ok_or_else(|| AppError::required_field("assignment_id"))?;
        let raw_start = data
            .start_time
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::required_field("start_time"))?;

        let employee = self.registry.find_employee(employee_id).await?;
        let assignment = self.registry.find_assignment(assignment_id).await?;
        if employee.is_none() || assignment.is_none() {
            return Err(AppError::with_message(ErrorCode::NotFound, MISSING_REFERENCE)
                .with_detail("employee_id", employee_id)
                .with_detail("assignment_id", assignment_id));
        }

        if self.store.exists_for_pair(employee_id, assignment_id).await? {
            return Err(already_assigned(employee_id, assignment_id));
        }

        let start_time = self.parse_time(raw_start, "start_time")?;
        let end_time = match data.end_time.as_deref() {
            Some(raw) => Some(self.parse_time(raw, "end_time")?),
            None => None,
        };
        let evaluation_score = Self::optional_score(data.evaluation_score.as_ref())?;
        validate_optional_text(&data.evaluation_comments, "evaluation_comments", MAX_NOTE_LEN)?;

        let record = NewEmployeeAssignment {
            employee_id,
            assignment_id,
            start_time,
            end_time,
            duration_us: derive_duration(start_time, end_time),
            evaluation_score,
            evaluation_comments: data.evaluation_comments.unwrap_or_default(),
            is_completed: data.is_completed.unwrap_or(false),
        };

        let created = match self.store.insert(record).await {
            Ok(r) => r,
            Err(RepoError::Duplicate(_)) => {
                return Err(already_assigned(employee_id, assignment_id));
            }
            // a referenced row vanished between the lookup and the insert
            Err(RepoError::NotFound(_)) => {
                return Err(AppError::with_message(ErrorCode::NotFound, MISSING_REFERENCE));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            id = created.id,
            employee_id,
            assignment_id,
            "Employee assigned"
        );
        Ok(created)
    }

    /// Apply the fields present in `data`, recomputing the duration
    pub async fn update(
        &self,
        id: i64,
        data: EmployeeAssignmentUpdate,
    ) -> AppResult<EmployeeAssignment> {
        self.get(id).await?;

        let start_time = match data.start_time.as_deref() {
            Some(raw) => Some(self.parse_time(raw, "start_time")?),
            None => None,
        };
        let end_time = match data.end_time {
            Some(Some(ref raw)) => Some(Some(self.parse_time(raw, "end_time")?)),
            Some(None) => Some(None),
            None => None,
        };
        let evaluation_score = match data.evaluation_score {
            Some(ref raw) => Some(Self::optional_score(raw.as_ref())?),
            None => None,
        };
        validate_optional_text(&data.evaluation_comments, "evaluation_comments", MAX_NOTE_LEN)?;
        let evaluation_comments = data.evaluation_comments;
        let is_completed = data.is_completed;

        let mutation: Mutation = Box::new(move |record: &mut EmployeeAssignment| {
            if let Some(start) = start_time {
                record.start_time = start;
            }
            if let Some(end) = end_time {
                record.end_time = end;
            }
            if let Some(score) = evaluation_score {
                record.evaluation_score = score;
            }
            if let Some(comments) = evaluation_comments {
                record.evaluation_comments = comments;
            }
            if let Some(done) = is_completed {
                record.is_completed = done;
            }
            record.duration_us = derive_duration(record.start_time, record.end_time);
        });

        let updated = self.modify(id, mutation).await?;
        tracing::debug!(id, "Employee assignment updated");
        Ok(updated)
    }

    /// Mark a record completed; repeated calls are no-ops
    pub async fn complete(&self, id: i64) -> AppResult<EmployeeAssignment> {
        let updated = self
            .modify(
                id,
                Box::new(|record: &mut EmployeeAssignment| {
                    record.is_completed = true;
                    record.duration_us = derive_duration(record.start_time, record.end_time);
                }),
            )
            .await?;
        tracing::info!(id, "Employee assignment completed");
        Ok(updated)
    }

    /// Overwrite the evaluation; the score is mandatory
    pub async fn evaluate(&self, id: i64, data: EvaluationRequest) -> AppResult<EmployeeAssignment> {
        self.get(id).await?;

        let score = match data.evaluation_score {
            None | Some(Value::Null) => {
                return Err(AppError::new(ErrorCode::ScoreRequired)
                    .with_detail("field", "evaluation_score"));
            }
            Some(ref raw) => parse_score(raw).map_err(|_| {
                AppError::with_message(ErrorCode::ScoreOutOfRange, SCORE_NOT_NUMBER)
                    .with_detail("field", "evaluation_score")
            })?,
        };
        validate_optional_text(&data.evaluation_comments, "evaluation_comments", MAX_NOTE_LEN)?;
        let comments = data.evaluation_comments.unwrap_or_default();

        let updated = self
            .modify(
                id,
                Box::new(move |record: &mut EmployeeAssignment| {
                    record.evaluation_score = Some(score);
                    record.evaluation_comments = comments;
                    record.duration_us = derive_duration(record.start_time, record.end_time);
                }),
            )
            .await?;
        tracing::info!(id, score, "Employee assignment evaluated");
        Ok(updated)
    }

    async fn modify(&self, id: i64, mutation: Mutation) -> AppResult<EmployeeAssignment> {
        match self.store.modify(id, mutation).await {
            Ok(record) => Ok(record),
            Err(RepoError::NotFound(_)) => Err(record_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}
