use axum::Json;
use serde::Deserialize;
use service::domain::{SuspendedEmployeeCreate, SuspendedEmployeeFilter, SuspendedEmployeeOut};
use service::pagination::{Page, Pagination};
use service::suspended_employee_service;
use utoipa::IntoParams;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson, ValidQuery};
use crate::routes::parse_company_type;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuspendedEmployeeListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    /// `sales` or `installation`
    pub company_type: Option<String>,
}

#[utoipa::path(
    get, path = "/suspended_employees", tag = "suspensions",
    params(SuspendedEmployeeListQuery),
    responses(
        (status = 200, description = "Page of suspended employees with employee and company"),
        (status = 400, description = "Invalid company_type"),
        (status = 404, description = "No suspended employees matched")
    )
)]
pub async fn list(
    uow: UnitOfWork,
    ValidQuery(q): ValidQuery<SuspendedEmployeeListQuery>,
) -> Result<Json<Page<SuspendedEmployeeOut>>, JsonApiError> {
    let filter = SuspendedEmployeeFilter {
        search: q.search,
        company_type: parse_company_type(q.company_type.as_deref())?,
    };
    let opts = Pagination::new(q.skip, q.limit);
    Ok(Json(suspended_employee_service::list_suspended_employees(uow.conn(), filter, opts).await?))
}

#[utoipa::path(
    post, path = "/suspended_employees", tag = "suspensions",
    request_body = crate::openapi::SuspendedEmployeeCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Unknown employee")
    )
)]
pub async fn create(
    uow: UnitOfWork,
    ValidJson(input): ValidJson<SuspendedEmployeeCreate>,
) -> Result<Json<SuspendedEmployeeOut>, JsonApiError> {
    Ok(Json(suspended_employee_service::create_suspended_employee(uow.conn(), input).await?))
}
