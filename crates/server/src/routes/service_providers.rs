use axum::Json;
use models::service_provider;
use service::domain::ServiceProviderCreate;
use service::service_provider_service;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson};

#[utoipa::path(get, path = "/service_providers", tag = "providers", responses((status = 200, description = "All service providers")))]
pub async fn list(uow: UnitOfWork) -> Result<Json<Vec<service_provider::Model>>, JsonApiError> {
    Ok(Json(service_provider_service::list_service_providers(uow.conn()).await?))
}

#[utoipa::path(
    post, path = "/service_providers", tag = "providers",
    request_body = crate::openapi::ServiceProviderCreateDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Unknown company"))
)]
pub async fn create(uow: UnitOfWork, ValidJson(input): ValidJson<ServiceProviderCreate>) -> Result<Json<service_provider::Model>, JsonApiError> {
    Ok(Json(service_provider_service::create_service_provider(uow.conn(), input).await?))
}
