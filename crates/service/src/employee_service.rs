use models::company;
use models::company_employee::{self, NewEmployee};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};
use tracing::{info, instrument};

use crate::domain::{CompanyEmployeeCreate, EmployeeFilter};
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::search::{self, lowered};

/// Create an employee under an existing company.
#[instrument(skip(db, input), fields(company_id = input.company_id))]
pub async fn create_employee<C: ConnectionTrait>(db: &C, input: CompanyEmployeeCreate) -> Result<company_employee::Model, ServiceError> {
    let created = company_employee::create(
        db,
        NewEmployee {
            name: &input.name,
            national_id: &input.national_id,
            job_number: &input.job_number,
            nationality: &input.nationality,
            phone: &input.phone,
            company_id: input.company_id,
        },
    )
    .await?;
    info!(id = created.id, "created company employee");
    Ok(created)
}

/// List employees joined to their company, filtered by company id and/or type,
/// searching name, national id and job number.
#[instrument(skip(db))]
pub async fn list_employees<C: ConnectionTrait>(
    db: &C,
    filter: EmployeeFilter,
    opts: Pagination,
) -> Result<Page<company_employee::Model>, ServiceError> {
    let mut select = company_employee::Entity::find()
        .join(JoinType::InnerJoin, company_employee::Relation::Company.def());
    if let Some(company_id) = filter.company_id {
        select = select.filter(company_employee::Column::CompanyId.eq(company_id));
    }
    if let Some(t) = filter.company_type {
        select = select.filter(company::Column::CompanyType.eq(t));
    }
    if let Some(term) = search::term(filter.search.as_deref()) {
        select = select.filter(search::matches_any(
            [
                lowered((company_employee::Entity, company_employee::Column::Name)),
                lowered((company_employee::Entity, company_employee::Column::NationalId)),
                lowered((company_employee::Entity, company_employee::Column::JobNumber)),
            ],
            term,
        ));
    }
    let select = select.order_by_asc(company_employee::Column::Id);
    fetch_page(db, select, opts, || ServiceError::NotFound("No company employees found".into())).await
}

/// Get an employee by id.
pub async fn get_employee<C: ConnectionTrait>(db: &C, id: i32) -> Result<company_employee::Model, ServiceError> {
    company_employee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Company Employee"))
}
