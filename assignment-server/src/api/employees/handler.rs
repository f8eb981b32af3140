//! Employee API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{
    EmployeeAssignment, EmployeeCreate, EmployeeDetail, EmployeeUpdate, EmployeeWithAssignments,
};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery, completed_flag};
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListQuery {
    pub organization: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompletedQuery {
    pub is_completed: Option<String>,
}

/// GET /employees/
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<EmployeeListQuery>,
) -> AppResult<Json<Vec<EmployeeDetail>>> {
    Ok(Json(state.registry.list_employee_details(query.organization).await?))
}

/// GET /employees/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<EmployeeWithAssignments>> {
    let employee = state.registry.get_employee_detail(id).await?;
    let assignments = state.engine.list_by_employee(id, None).await?;
    Ok(Json(EmployeeWithAssignments {
        employee,
        assignments,
    }))
}

/// POST /employees/
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeDetail>)> {
    let employee = state.registry.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT|PATCH /employees/{id}/
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EmployeeUpdate>,
) -> AppResult<Json<EmployeeDetail>> {
    Ok(Json(state.registry.update_employee(id, payload).await?))
}

/// DELETE /employees/{id}/
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.registry.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /employees/{id}/assignments/
pub async fn list_assignments(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<CompletedQuery>,
) -> AppResult<Json<Vec<EmployeeAssignment>>> {
    state.registry.get_employee(id).await?;
    let completed = completed_flag(query.is_completed.as_deref());
    Ok(Json(state.engine.list_by_employee(id, completed).await?))
}
