use std::collections::HashMap;

use models::{beneficiary, suspended_beneficiary};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};
use tracing::{info, instrument};

use crate::domain::{today, SearchFilter, SuspendedBeneficiaryCreate, SuspendedBeneficiaryWithBeneficiary};
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::search::{self, lowered, lowered_text};

/// Record a suspension for a beneficiary; the date defaults to today.
#[instrument(skip(db, input), fields(beneficiary_id = input.beneficiary_id))]
pub async fn create_suspended_beneficiary<C: ConnectionTrait>(
    db: &C,
    input: SuspendedBeneficiaryCreate,
) -> Result<suspended_beneficiary::Model, ServiceError> {
    let suspended_at = input.suspended_at.unwrap_or_else(today);
    let created = suspended_beneficiary::create(db, input.beneficiary_id, suspended_at).await?;
    info!(id = created.id, "created suspended beneficiary");
    Ok(created)
}

pub async fn get_suspended_beneficiary<C: ConnectionTrait>(db: &C, id: i32) -> Result<suspended_beneficiary::Model, ServiceError> {
    suspended_beneficiary::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Suspended Beneficiary"))
}

/// Most recent suspensions first, each with its beneficiary nested. Search
/// covers the beneficiary id and the beneficiary's name, national id and phone.
#[instrument(skip(db))]
pub async fn list_suspended_beneficiaries<C: ConnectionTrait>(
    db: &C,
    filter: SearchFilter,
    opts: Pagination,
) -> Result<Page<SuspendedBeneficiaryWithBeneficiary>, ServiceError> {
    let mut select = suspended_beneficiary::Entity::find()
        .join(JoinType::InnerJoin, suspended_beneficiary::Relation::Beneficiary.def());
    if let Some(term) = search::term(filter.search.as_deref()) {
        select = select.filter(search::matches_any(
            [
                lowered_text((suspended_beneficiary::Entity, suspended_beneficiary::Column::BeneficiaryId)),
                lowered((beneficiary::Entity, beneficiary::Column::Name)),
                lowered((beneficiary::Entity, beneficiary::Column::NationalId)),
                lowered((beneficiary::Entity, beneficiary::Column::Phone)),
            ],
            term,
        ));
    }
    let select = select
        .order_by_desc(suspended_beneficiary::Column::SuspendedAt)
        .order_by_desc(suspended_beneficiary::Column::Id);
    let page = fetch_page(db, select, opts, || ServiceError::NotFound("No suspended beneficiaries found".into())).await?;

    let ids: Vec<i32> = page.data.iter().map(|r| r.beneficiary_id).collect();
    let beneficiaries: HashMap<i32, beneficiary::Model> = beneficiary::Entity::find()
        .filter(beneficiary::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();

    let mut data = Vec::with_capacity(page.data.len());
    for row in &page.data {
        let b = beneficiaries.get(&row.beneficiary_id).cloned().ok_or_else(|| {
            ServiceError::Db(format!("beneficiary {} missing for suspension {}", row.beneficiary_id, row.id))
        })?;
        data.push(SuspendedBeneficiaryWithBeneficiary::new(row.clone(), b));
    }
    Ok(page.with_data(data))
}
