//! Assignment Registry
//!
//! Field-level persistence for users, organizations, employees and
//! assignments. Referenced records are resolved before writes so a missing
//! reference surfaces as NotFound rather than a constraint failure.

use std::sync::Arc;

use chrono_tz::Tz;
use shared::models::{
    Assignment, AssignmentCreate, AssignmentDetail, AssignmentUpdate, Employee, EmployeeCreate,
    EmployeeDetail, EmployeeUpdate, Organization, OrganizationCreate, OrganizationDetail,
    OrganizationUpdate, User, UserCreate,
};

use crate::db::repository::{
    AssignmentChanges, AssignmentFilter, AssignmentStore, EmployeeStore, NewAssignment,
    OrganizationStore, RepoError, UserStore,
};
use crate::utils::time::parse_timestamp_field;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_USERNAME_LEN,
    validate_optional_required_text, validate_optional_text, validate_required_text,
    validate_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct Registry {
    users: Arc<dyn UserStore>,
    organizations: Arc<dyn OrganizationStore>,
    employees: Arc<dyn EmployeeStore>,
    assignments: Arc<dyn AssignmentStore>,
    /// Zone for naive deadlines
    time_zone: Tz,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("time_zone", &self.time_zone)
            .finish_non_exhaustive()
    }
}

fn organization_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::OrganizationNotFound,
        format!("Organization {id} not found"),
    )
}

fn employee_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
}

fn assignment_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::AssignmentNotFound,
        format!("Assignment {id} not found"),
    )
}

fn user_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::UserNotFound, format!("User {id} not found"))
}

impl Registry {
    pub fn new(
        users: Arc<dyn UserStore>,
        organizations: Arc<dyn OrganizationStore>,
        employees: Arc<dyn EmployeeStore>,
        assignments: Arc<dyn AssignmentStore>,
        time_zone: Tz,
    ) -> Self {
        Self {
            users,
            organizations,
            employees,
            assignments,
            time_zone,
        }
    }

    // ==================== Users ====================

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.find_all().await?)
    }

    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn create_user(&self, data: UserCreate) -> AppResult<User> {
        validate_required_text(&data.username, "username", MAX_USERNAME_LEN)?;
        validate_text(&data.first_name, "first_name", MAX_USERNAME_LEN)?;
        validate_text(&data.last_name, "last_name", MAX_USERNAME_LEN)?;
        validate_text(&data.email, "email", MAX_EMAIL_LEN)?;

        match self.users.create(data).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "User created");
                Ok(user)
            }
            Err(RepoError::Duplicate(msg)) => {
                Err(AppError::with_message(ErrorCode::UsernameExists, msg))
            }
            Err(e) => Err(e.into()),
        }
    }

    // ==================== Organizations ====================

    pub async fn list_organizations(&self) -> AppResult<Vec<Organization>> {
        Ok(self.organizations.find_all().await?)
    }

    pub async fn get_organization(&self, id: i64) -> AppResult<Organization> {
        self.organizations
            .find_by_id(id)
            .await?
            .ok_or_else(|| organization_not_found(id))
    }

    /// Organization with its employees and assignments
    pub async fn get_organization_detail(&self, id: i64) -> AppResult<OrganizationDetail> {
        let organization = self.get_organization(id).await?;
        let employees = self.employees.find_all(Some(id)).await?;
        let assignments = self
            .assignments
            .find_all(AssignmentFilter {
                organization_id: Some(id),
                status: None,
            })
            .await?;
        Ok(OrganizationDetail {
            organization,
            employees,
            assignments,
        })
    }

    pub async fn create_organization(&self, data: OrganizationCreate) -> AppResult<Organization> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_text(&data.address, "address", MAX_NOTE_LEN)?;

        let org = self.organizations.create(data).await?;
        tracing::info!(organization_id = org.id, name = %org.name, "Organization created");
        Ok(org)
    }

    pub async fn update_organization(
        &self,
        id: i64,
        data: OrganizationUpdate,
    ) -> AppResult<Organization> {
        validate_optional_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&data.address, "address", MAX_NOTE_LEN)?;

        match self.organizations.update(id, data).await {
            Ok(org) => Ok(org),
            Err(RepoError::NotFound(_)) => Err(organization_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an organization together with its employees and assignments
    pub async fn delete_organization(&self, id: i64) -> AppResult<()> {
        if !self.organizations.delete(id).await? {
            return Err(organization_not_found(id));
        }
        tracing::info!(organization_id = id, "Organization deleted");
        Ok(())
    }

    // ==================== Employees ====================

    pub async fn list_employees(&self, organization_id: Option<i64>) -> AppResult<Vec<Employee>> {
        Ok(self.employees.find_all(organization_id).await?)
    }

    pub async fn find_employee(&self, id: i64) -> AppResult<Option<Employee>> {
        Ok(self.employees.find_by_id(id).await?)
    }

    pub async fn get_employee(&self, id: i64) -> AppResult<Employee> {
        self.find_employee(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Employee with user and organization embedded
    pub async fn get_employee_detail(&self, id: i64) -> AppResult<EmployeeDetail> {
        let employee = self.get_employee(id).await?;
        self.employee_detail(employee).await
    }

    pub async fn employee_detail(&self, employee: Employee) -> AppResult<EmployeeDetail> {
        let user = self.get_user(employee.user_id).await?;
        let organization = self.get_organization(employee.organization_id).await?;
        Ok(EmployeeDetail::from_parts(employee, user, organization))
    }

    pub async fn list_employee_details(
        &self,
        organization_id: Option<i64>,
    ) -> AppResult<Vec<EmployeeDetail>> {
        let employees = self.list_employees(organization_id).await?;
        let mut details = Vec::with_capacity(employees.len());
        for employee in employees {
            details.push(self.employee_detail(employee).await?);
        }
        Ok(details)
    }

    pub async fn create_employee(&self, data: EmployeeCreate) -> AppResult<EmployeeDetail> {
        validate_required_text(&data.department, "department", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.position, "position", MAX_SHORT_TEXT_LEN)?;

        self.get_user(data.user_id).await?;
        self.get_organization(data.organization_id).await?;
        if self.employees.find_by_user(data.user_id).await?.is_some() {
            return Err(AppError::new(ErrorCode::UserAlreadyEmployed)
                .with_detail("user_id", data.user_id));
        }

        let employee = match self.employees.create(data).await {
            Ok(e) => e,
            // lost a race against another create for the same user
            Err(RepoError::Duplicate(_)) => {
                return Err(AppError::new(ErrorCode::UserAlreadyEmployed));
            }
            Err(e) => return Err(e.into()),
        };
        tracing::info!(
            employee_id = employee.id,
            user_id = employee.user_id,
            organization_id = employee.organization_id,
            "Employee created"
        );
        self.employee_detail(employee).await
    }

    pub async fn update_employee(&self, id: i64, data: EmployeeUpdate) -> AppResult<EmployeeDetail> {
        validate_optional_required_text(&data.department, "department", MAX_SHORT_TEXT_LEN)?;
        validate_optional_required_text(&data.position, "position", MAX_SHORT_TEXT_LEN)?;

        self.get_employee(id).await?;
        if let Some(org_id) = data.organization_id {
            self.get_organization(org_id).await?;
        }

        let employee = match self.employees.update(id, data).await {
            Ok(e) => e,
            Err(RepoError::NotFound(_)) => return Err(employee_not_found(id)),
            Err(e) => return Err(e.into()),
        };
        self.employee_detail(employee).await
    }

    /// Delete an employee together with its employee-assignment records
    pub async fn delete_employee(&self, id: i64) -> AppResult<()> {
        if !self.employees.delete(id).await? {
            return Err(employee_not_found(id));
        }
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    // ==================== Assignments ====================

    pub async fn list_assignments(&self, filter: AssignmentFilter) -> AppResult<Vec<Assignment>> {
        Ok(self.assignments.find_all(filter).await?)
    }

    pub async fn find_assignment(&self, id: i64) -> AppResult<Option<Assignment>> {
        Ok(self.assignments.find_by_id(id).await?)
    }

    pub async fn get_assignment(&self, id: i64) -> AppResult<Assignment> {
        self.find_assignment(id)
            .await?
            .ok_or_else(|| assignment_not_found(id))
    }

    /// Assignment with its organization embedded
    pub async fn get_assignment_detail(&self, id: i64) -> AppResult<AssignmentDetail> {
        let assignment = self.get_assignment(id).await?;
        self.assignment_detail(assignment).await
    }

    pub async fn assignment_detail(&self, assignment: Assignment) -> AppResult<AssignmentDetail> {
        let organization = self.get_organization(assignment.organization_id).await?;
        Ok(AssignmentDetail::from_parts(assignment, organization))
    }

    pub async fn list_assignment_details(
        &self,
        filter: AssignmentFilter,
    ) -> AppResult<Vec<AssignmentDetail>> {
        let assignments = self.list_assignments(filter).await?;
        let mut details = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            details.push(self.assignment_detail(assignment).await?);
        }
        Ok(details)
    }

    pub async fn create_assignment(&self, data: AssignmentCreate) -> AppResult<AssignmentDetail> {
        validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
        validate_text(&data.description, "description", MAX_NOTE_LEN)?;
        let deadline = parse_timestamp_field(&data.deadline, self.time_zone, "deadline")?;
        self.get_organization(data.organization_id).await?;

        let assignment = self
            .assignments
            .create(NewAssignment {
                title: data.title,
                description: data.description,
                organization_id: data.organization_id,
                deadline,
                status: data.status,
            })
            .await?;
        tracing::info!(
            assignment_id = assignment.id,
            organization_id = assignment.organization_id,
            status = assignment.status.as_str(),
            "Assignment created"
        );
        self.assignment_detail(assignment).await
    }

    pub async fn update_assignment(
        &self,
        id: i64,
        data: AssignmentUpdate,
    ) -> AppResult<AssignmentDetail> {
        validate_optional_required_text(&data.title, "title", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        let deadline = data
            .deadline
            .as_deref()
            .map(|raw| parse_timestamp_field(raw, self.time_zone, "deadline"))
            .transpose()?;

        self.get_assignment(id).await?;
        if let Some(org_id) = data.organization_id {
            self.get_organization(org_id).await?;
        }

        let changes = AssignmentChanges {
            title: data.title,
            description: data.description,
            organization_id: data.organization_id,
            deadline,
            status: data.status,
        };
        let assignment = match self.assignments.update(id, changes).await {
            Ok(a) => a,
            Err(RepoError::NotFound(_)) => return Err(assignment_not_found(id)),
            Err(e) => return Err(e.into()),
        };
        self.assignment_detail(assignment).await
    }

    /// Delete an assignment together with its employee-assignment records
    pub async fn delete_assignment(&self, id: i64) -> AppResult<()> {
        if !self.assignments.delete(id).await? {
            return Err(assignment_not_found(id));
        }
        tracing::info!(assignment_id = id, "Assignment deleted");
        Ok(())
    }
}
