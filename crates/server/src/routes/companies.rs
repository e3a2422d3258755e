use axum::Json;
use models::company::{self, CompanyType};
use serde::Deserialize;
use service::company_service;
use service::domain::{CompanyCreate, CompanyFilter};
use service::pagination::{Page, Pagination};
use utoipa::IntoParams;

use crate::errors::JsonApiError;
use crate::extract::{UnitOfWork, ValidJson, ValidPath, ValidQuery};
use crate::routes::PageQuery;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyListQuery {
    /// `sales` or `installation`
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

fn required_type(raw: Option<&str>) -> Result<CompanyType, JsonApiError> {
    let raw = raw.ok_or_else(|| JsonApiError::bad_request("Query parameter 'type' is required"))?;
    raw.parse::<CompanyType>()
        .map_err(|_| JsonApiError::bad_request("Invalid type. Use 'sales' or 'installation'."))
}

async fn list_of_type(
    uow: &UnitOfWork,
    company_type: CompanyType,
    search: Option<String>,
    opts: Pagination,
) -> Result<Json<Page<company::Model>>, JsonApiError> {
    let filter = CompanyFilter { company_type: Some(company_type), search };
    Ok(Json(company_service::list_companies(uow.conn(), filter, opts).await?))
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(CompanyListQuery),
    responses(
        (status = 200, description = "Page of companies"),
        (status = 400, description = "Missing or invalid type"),
        (status = 404, description = "No companies matched")
    )
)]
pub async fn list(uow: UnitOfWork, ValidQuery(q): ValidQuery<CompanyListQuery>) -> Result<Json<Page<company::Model>>, JsonApiError> {
    let company_type = required_type(q.company_type.as_deref())?;
    list_of_type(&uow, company_type, q.search, Pagination::new(q.skip, q.limit)).await
}

#[utoipa::path(
    get, path = "/companies_sales", tag = "companies",
    params(PageQuery),
    responses((status = 200, description = "Page of sales companies"), (status = 404, description = "No companies matched"))
)]
pub async fn list_sales(uow: UnitOfWork, ValidQuery(q): ValidQuery<PageQuery>) -> Result<Json<Page<company::Model>>, JsonApiError> {
    let opts = q.pagination();
    list_of_type(&uow, CompanyType::Sales, q.search, opts).await
}

#[utoipa::path(
    get, path = "/companies_installation", tag = "companies",
    params(PageQuery),
    responses((status = 200, description = "Page of installation companies"), (status = 404, description = "No companies matched"))
)]
pub async fn list_installation(uow: UnitOfWork, ValidQuery(q): ValidQuery<PageQuery>) -> Result<Json<Page<company::Model>>, JsonApiError> {
    let opts = q.pagination();
    list_of_type(&uow, CompanyType::Installation, q.search, opts).await
}

#[utoipa::path(
    get, path = "/companies/{unified_number}", tag = "companies",
    params(("unified_number" = String, Path, description = "Unified number")),
    responses((status = 200, description = "Company"), (status = 404, description = "Company not found"))
)]
pub async fn get_by_unified_number(uow: UnitOfWork, ValidPath(unified_number): ValidPath<String>) -> Result<Json<company::Model>, JsonApiError> {
    Ok(Json(company_service::get_company_by_unified_number(uow.conn(), &unified_number).await?))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create(uow: UnitOfWork, ValidJson(input): ValidJson<CompanyCreate>) -> Result<Json<company::Model>, JsonApiError> {
    Ok(Json(company_service::create_company(uow.conn(), input).await?))
}
