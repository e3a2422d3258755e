use models::company::{self, CompanyType};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use crate::domain::{CompanyCreate, CompanyFilter};
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::search::{self, lowered};

/// Create a company.
#[instrument(skip(db, input), fields(unified_number = %input.unified_number, company_type = %input.company_type))]
pub async fn create_company<C: ConnectionTrait>(db: &C, input: CompanyCreate) -> Result<company::Model, ServiceError> {
    let created = company::create(db, &input.name, &input.commercial_number, &input.unified_number, input.company_type).await?;
    info!(id = created.id, "created company");
    Ok(created)
}

/// List companies, optionally restricted to one type, searching name,
/// commercial number and unified number.
#[instrument(skip(db))]
pub async fn list_companies<C: ConnectionTrait>(
    db: &C,
    filter: CompanyFilter,
    opts: Pagination,
) -> Result<Page<company::Model>, ServiceError> {
    let mut select = company::Entity::find();
    if let Some(t) = filter.company_type {
        select = select.filter(company::Column::CompanyType.eq(t));
    }
    if let Some(term) = search::term(filter.search.as_deref()) {
        select = select.filter(search::matches_any(
            [
                lowered((company::Entity, company::Column::Name)),
                lowered((company::Entity, company::Column::CommercialNumber)),
                lowered((company::Entity, company::Column::UnifiedNumber)),
            ],
            term,
        ));
    }
    let select = select.order_by_asc(company::Column::Id);
    fetch_page(db, select, opts, || not_found_for(filter.company_type)).await
}

fn not_found_for(company_type: Option<CompanyType>) -> ServiceError {
    match company_type {
        Some(t) => ServiceError::NotFound(format!("No {t} companies found")),
        None => ServiceError::NotFound("No companies found".into()),
    }
}

/// Get a company by unified number; the lowest id wins if the number repeats.
pub async fn get_company_by_unified_number<C: ConnectionTrait>(db: &C, unified_number: &str) -> Result<company::Model, ServiceError> {
    company::Entity::find()
        .filter(company::Column::UnifiedNumber.eq(unified_number))
        .order_by_asc(company::Column::Id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Company"))
}
