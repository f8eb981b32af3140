//! Assignment API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{
    AssignmentCreate, AssignmentDetail, AssignmentStatus, AssignmentUpdate,
    AssignmentWithEmployees, EmployeeAssignment,
};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery, completed_flag};
use crate::core::ServerState;
use crate::db::repository::AssignmentFilter;
use crate::utils::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct AssignmentListQuery {
    pub organization: Option<i64>,
    pub status: Option<AssignmentStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompletedQuery {
    pub is_completed: Option<String>,
}

/// GET /assignments/
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<AssignmentListQuery>,
) -> AppResult<Json<Vec<AssignmentDetail>>> {
    let filter = AssignmentFilter {
        organization_id: query.organization,
        status: query.status,
    };
    Ok(Json(state.registry.list_assignment_details(filter).await?))
}

/// GET /assignments/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<AssignmentWithEmployees>> {
    let assignment = state.registry.get_assignment_detail(id).await?;
    let assigned_employees = state.engine.list_by_assignment(id, None).await?;
    Ok(Json(AssignmentWithEmployees {
        assignment,
        assigned_employees,
    }))
}

/// POST /assignments/
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<AssignmentCreate>,
) -> AppResult<(StatusCode, Json<AssignmentDetail>)> {
    let assignment = state.registry.create_assignment(payload).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// PUT|PATCH /assignments/{id}/
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AssignmentUpdate>,
) -> AppResult<Json<AssignmentDetail>> {
    Ok(Json(state.registry.update_assignment(id, payload).await?))
}

/// DELETE /assignments/{id}/
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.registry.delete_assignment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /assignments/{id}/assigned_employees/
pub async fn list_assigned_employees(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<CompletedQuery>,
) -> AppResult<Json<Vec<EmployeeAssignment>>> {
    state.registry.get_assignment(id).await?;
    let completed = completed_flag(query.is_completed.as_deref());
    Ok(Json(state.engine.list_by_assignment(id, completed).await?))
}
