//! Employee-Assignment API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{
    EmployeeAssignment, EmployeeAssignmentCreate, EmployeeAssignmentFilter,
    EmployeeAssignmentUpdate, EvaluationRequest,
};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery, completed_flag};
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub employee: Option<i64>,
    pub assignment: Option<i64>,
    pub is_completed: Option<String>,
}

/// GET /employee-assignments/
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<Vec<EmployeeAssignment>>> {
    let filter = EmployeeAssignmentFilter {
        employee_id: query.employee,
        assignment_id: query.assignment,
        is_completed: completed_flag(query.is_completed.as_deref()),
    };
    Ok(Json(state.engine.list(filter).await?))
}

/// GET /employee-assignments/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<EmployeeAssignment>> {
    Ok(Json(state.engine.get(id).await?))
}

/// POST /employee-assignments/
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<EmployeeAssignmentCreate>,
) -> AppResult<(StatusCode, Json<EmployeeAssignment>)> {
    let record = state.engine.create(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT|PATCH /employee-assignments/{id}/
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EmployeeAssignmentUpdate>,
) -> AppResult<Json<EmployeeAssignment>> {
    Ok(Json(state.engine.update(id, payload).await?))
}

/// POST /employee-assignments/{id}/evaluate/
pub async fn evaluate(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EvaluationRequest>,
) -> AppResult<Json<EmployeeAssignment>> {
    Ok(Json(state.engine.evaluate(id, payload).await?))
}

/// POST /employee-assignments/{id}/complete/
pub async fn complete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<EmployeeAssignment>> {
    Ok(Json(state.engine.complete(id).await?))
}
