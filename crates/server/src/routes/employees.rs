use axum::Json;
use models::company_employee;
use serde::Deserialize;
use service::domain::{CompanyEmployeeCreate, EmployeeFilter};
use service::employee_service;
use service::pagination::{Page, Pagination};
use utoipa::IntoParams;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson, ValidPath, ValidQuery};
use crate::routes::parse_company_type;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub company_id: Option<i32>,
    /// `sales` or `installation`
    pub company_type: Option<String>,
}

#[utoipa::path(
    get, path = "/company_employees", tag = "employees",
    params(EmployeeListQuery),
    responses(
        (status = 200, description = "Page of employees"),
        (status = 400, description = "Invalid company_type"),
        (status = 404, description = "No employees matched")
    )
)]
pub async fn list(
    uow: UnitOfWork,
    ValidQuery(q): ValidQuery<EmployeeListQuery>,
) -> Result<Json<Page<company_employee::Model>>, JsonApiError> {
    let filter = EmployeeFilter {
        search: q.search,
        company_id: q.company_id,
        company_type: parse_company_type(q.company_type.as_deref())?,
    };
    let page = employee_service::list_employees(uow.conn(), filter, Pagination::new(q.skip, q.limit)).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/company_employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses((status = 200, description = "Employee"), (status = 404, description = "Company Employee not found"))
)]
pub async fn get(uow: UnitOfWork, ValidPath(id): ValidPath<i32>) -> Result<Json<company_employee::Model>, JsonApiError> {
    Ok(Json(employee_service::get_employee(uow.conn(), id).await?))
}

#[utoipa::path(
    post, path = "/company_employees", tag = "employees",
    request_body = crate::openapi::CompanyEmployeeCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate national id or unknown company")
    )
)]
pub async fn create(
    uow: UnitOfWork,
    ValidJson(input): ValidJson<CompanyEmployeeCreate>,
) -> Result<Json<company_employee::Model>, JsonApiError> {
    Ok(Json(employee_service::create_employee(uow.conn(), input).await?))
}
