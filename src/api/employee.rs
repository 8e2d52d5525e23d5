use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error::error_response;
use crate::infrastructure::AppState;
use crate::models::Employee;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully.";

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 409, description = "An employee with this email already exists")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> impl IntoResponse {
    let employee = Employee { id: None, ..employee };

    match state.employee_service.save_employee(employee).await {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    match state.employee_service.get_all_employees().await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.employee_service.get_employee_by_id(id).await {
        Ok(Some(employee)) => (StatusCode::OK, Json(employee)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> impl IntoResponse {
    let existing = match state.employee_service.get_employee_by_id(id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return error_response(e),
    };

    let employee = Employee {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        ..existing
    };

    match state.employee_service.update_employee(employee).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Delete requested; succeeds whether or not the employee existed", body = String)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.employee_service.delete_employee(id).await {
        Ok(()) => (StatusCode::OK, DELETED_MESSAGE).into_response(),
        Err(e) => error_response(e),
    }
}
