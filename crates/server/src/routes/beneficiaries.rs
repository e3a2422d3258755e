use axum::Json;
use models::beneficiary;
use service::beneficiary_service;
use service::domain::{BeneficiaryCreate, SearchFilter};
use service::pagination::Page;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson, ValidPath, ValidQuery};
use crate::routes::PageQuery;

#[utoipa::path(
    get, path = "/beneficiaries", tag = "beneficiaries",
    params(PageQuery),
    responses((status = 200, description = "Page of beneficiaries"), (status = 404, description = "No beneficiaries matched"))
)]
pub async fn list(uow: UnitOfWork, ValidQuery(q): ValidQuery<PageQuery>) -> Result<Json<Page<beneficiary::Model>>, JsonApiError> {
    let opts = q.pagination();
    let filter = SearchFilter { search: q.search };
    Ok(Json(beneficiary_service::list_beneficiaries(uow.conn(), filter, opts).await?))
}

#[utoipa::path(
    get, path = "/beneficiaries/{national_id}", tag = "beneficiaries",
    params(("national_id" = String, Path, description = "National id")),
    responses((status = 200, description = "Beneficiary"), (status = 404, description = "Beneficiary not found"))
)]
pub async fn get_by_national_id(uow: UnitOfWork, ValidPath(national_id): ValidPath<String>) -> Result<Json<beneficiary::Model>, JsonApiError> {
    Ok(Json(beneficiary_service::get_beneficiary_by_national_id(uow.conn(), &national_id).await?))
}

#[utoipa::path(
    post, path = "/beneficiaries", tag = "beneficiaries",
    request_body = crate::openapi::BeneficiaryCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate national id")
    )
)]
pub async fn create(uow: UnitOfWork, ValidJson(input): ValidJson<BeneficiaryCreate>) -> Result<Json<beneficiary::Model>, JsonApiError> {
    Ok(Json(beneficiary_service::create_beneficiary(uow.conn(), input).await?))
}
