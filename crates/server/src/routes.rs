use axum::{routing::get, Json, Router};
use models::company::CompanyType;
use serde::Deserialize;
use service::pagination::Pagination;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{IntoParams, OpenApi};

use common::types::{Banner, Health};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod assignments;
pub mod beneficiaries;
pub mod companies;
pub mod employees;
pub mod service_providers;
pub mod suspended_beneficiaries;
pub mod suspended_employees;

pub const BANNER: &str = "Suspension registry is running";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service banner")))]
pub async fn banner() -> Json<Banner> {
    Json(Banner::new(BANNER))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `skip` / `limit` / `search` shared by the paginated lists.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Matching rows to omit (default 0)
    pub skip: Option<u64>,
    /// Maximum rows returned (default 100)
    pub limit: Option<u64>,
    /// Case-insensitive substring search
    pub search: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.skip, self.limit)
    }
}

/// Optional company type filter; an empty value means no filter.
pub fn parse_company_type(raw: Option<&str>) -> Result<Option<CompanyType>, JsonApiError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<CompanyType>()
            .map(Some)
            .map_err(|_| JsonApiError::bad_request("Invalid company_type. Use 'sales' or 'installation'.")),
    }
}

/// Build the application router: record endpoints, health and the OpenAPI document.
pub fn build_router(state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));

    let records = Router::new()
        .route("/companies", get(companies::list).post(companies::create))
        .route("/companies_sales", get(companies::list_sales))
        .route("/companies_installation", get(companies::list_installation))
        .route("/companies/:unified_number", get(companies::get_by_unified_number))
        .route("/company_employees", get(employees::list).post(employees::create))
        .route("/company_employees/:id", get(employees::get))
        .route("/suspended_employees", get(suspended_employees::list).post(suspended_employees::create))
        .route("/beneficiaries", get(beneficiaries::list).post(beneficiaries::create))
        .route("/beneficiaries/:national_id", get(beneficiaries::get_by_national_id))
        .route(
            "/suspended_beneficiaries",
            get(suspended_beneficiaries::list).post(suspended_beneficiaries::create),
        )
        .route("/suspended_beneficiaries/:id", get(suspended_beneficiaries::get))
        .route("/service_providers", get(service_providers::list).post(service_providers::create))
        .route("/employee_service_provider", get(assignments::list).post(assignments::create));

    public
        .merge(records)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
