use axum::Json;
use models::employee_service_provider;
use service::assignment_service;
use service::domain::EmployeeServiceProviderCreate;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson};

#[utoipa::path(get, path = "/employee_service_provider", tag = "providers", responses((status = 200, description = "All assignments")))]
pub async fn list(uow: UnitOfWork) -> Result<Json<Vec<employee_service_provider::Model>>, JsonApiError> {
    Ok(Json(assignment_service::list_assignments(uow.conn()).await?))
}

#[utoipa::path(
    post, path = "/employee_service_provider", tag = "providers",
    request_body = crate::openapi::EmployeeServiceProviderCreateDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Unknown employee or provider"))
)]
pub async fn create(
    uow: UnitOfWork,
    ValidJson(input): ValidJson<EmployeeServiceProviderCreate>,
) -> Result<Json<employee_service_provider::Model>, JsonApiError> {
    Ok(Json(assignment_service::create_assignment(uow.conn(), input).await?))
}
