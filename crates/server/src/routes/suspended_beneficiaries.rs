use axum::Json;
use models::suspended_beneficiary;
use service::domain::{SearchFilter, SuspendedBeneficiaryCreate, SuspendedBeneficiaryWithBeneficiary};
use service::pagination::Page;
use service::suspended_beneficiary_service;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson, ValidPath, ValidQuery};
use crate::routes::PageQuery;

#[utoipa::path(
    get, path = "/suspended_beneficiaries", tag = "suspensions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of suspensions, most recent first"),
        (status = 404, description = "No suspended beneficiaries matched")
    )
)]
pub async fn list(
    uow: UnitOfWork,
    ValidQuery(q): ValidQuery<PageQuery>,
) -> Result<Json<Page<SuspendedBeneficiaryWithBeneficiary>>, JsonApiError> {
    let opts = q.pagination();
    let filter = SearchFilter { search: q.search };
    Ok(Json(suspended_beneficiary_service::list_suspended_beneficiaries(uow.conn(), filter, opts).await?))
}

#[utoipa::path(
    get, path = "/suspended_beneficiaries/{id}", tag = "suspensions",
    params(("id" = i32, Path, description = "Suspension id")),
    responses((status = 200, description = "Suspension"), (status = 404, description = "Suspended Beneficiary not found"))
)]
pub async fn get(uow: UnitOfWork, ValidPath(id): ValidPath<i32>) -> Result<Json<suspended_beneficiary::Model>, JsonApiError> {
    Ok(Json(suspended_beneficiary_service::get_suspended_beneficiary(uow.conn(), id).await?))
}

#[utoipa::path(
    post, path = "/suspended_beneficiaries", tag = "suspensions",
    request_body = crate::openapi::SuspendedBeneficiaryCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Unknown beneficiary")
    )
)]
pub async fn create(
    uow: UnitOfWork,
    ValidJson(input): ValidJson<SuspendedBeneficiaryCreate>,
) -> Result<Json<suspended_beneficiary::Model>, JsonApiError> {
    Ok(Json(suspended_beneficiary_service::create_suspended_beneficiary(uow.conn(), input).await?))
}
