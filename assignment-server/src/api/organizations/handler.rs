//! Organization API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{
    AssignmentDetail, EmployeeDetail, Organization, OrganizationCreate, OrganizationDetail,
    OrganizationUpdate,
};

use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::db::repository::AssignmentFilter;
use crate::utils::AppResult;

/// GET /organizations/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Organization>>> {
    Ok(Json(state.registry.list_organizations().await?))
}

/// GET /organizations/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<OrganizationDetail>> {
    Ok(Json(state.registry.get_organization_detail(id).await?))
}

/// POST /organizations/
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OrganizationCreate>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    let org = state.registry.create_organization(payload).await?;
    Ok((StatusCode::CREATED, Json(org)))
}

/// PUT|PATCH /organizations/{id}/
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<OrganizationUpdate>,
) -> AppResult<Json<Organization>> {
    Ok(Json(state.registry.update_organization(id, payload).await?))
}

/// DELETE /organizations/{id}/
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.registry.delete_organization(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /organizations/{id}/employees/
pub async fn list_employees(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Vec<EmployeeDetail>>> {
    state.registry.get_organization(id).await?;
    Ok(Json(state.registry.list_employee_details(Some(id)).await?))
}

/// GET /organizations/{id}/assignments/
pub async fn list_assignments(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Vec<AssignmentDetail>>> {
    state.registry.get_organization(id).await?;
    let filter = AssignmentFilter {
        organization_id: Some(id),
        status: None,
    };
    Ok(Json(state.registry.list_assignment_details(filter).await?))
}
