use models::beneficiary;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use crate::domain::{BeneficiaryCreate, SearchFilter};
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::search::{self, lowered};

#[instrument(skip(db, input))]
pub async fn create_beneficiary<C: ConnectionTrait>(db: &C, input: BeneficiaryCreate) -> Result<beneficiary::Model, ServiceError> {
    let created = beneficiary::create(db, &input.name, &input.national_id, &input.phone, &input.nationality).await?;
    info!(id = created.id, "created beneficiary");
    Ok(created)
}

/// Paginated beneficiaries, searching name, national id and phone.
#[instrument(skip(db))]
pub async fn list_beneficiaries<C: ConnectionTrait>(
    db: &C,
    filter: SearchFilter,
    opts: Pagination,
) -> Result<Page<beneficiary::Model>, ServiceError> {
    let mut select = beneficiary::Entity::find();
    if let Some(term) = search::term(filter.search.as_deref()) {
        select = select.filter(search::matches_any(
            [
                lowered((beneficiary::Entity, beneficiary::Column::Name)),
                lowered((beneficiary::Entity, beneficiary::Column::NationalId)),
                lowered((beneficiary::Entity, beneficiary::Column::Phone)),
            ],
            term,
        ));
    }
    let select = select.order_by_asc(beneficiary::Column::Id);
    fetch_page(db, select, opts, || ServiceError::NotFound("No beneficiaries found".into())).await
}

pub async fn get_beneficiary_by_national_id<C: ConnectionTrait>(db: &C, national_id: &str) -> Result<beneficiary::Model, ServiceError> {
    beneficiary::Entity::find()
        .filter(beneficiary::Column::NationalId.eq(national_id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Beneficiary"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(name: &str, national_id: &str, phone: &str) -> BeneficiaryCreate {
        BeneficiaryCreate { name: name.into(), national_id: national_id.into(), phone: phone.into(), nationality: "SA".into() }
    }

    #[tokio::test]
    async fn create_then_lookup_by_national_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let submitted = input("Sara", "2001", "0551112222");
        let created = create_beneficiary(&db, submitted.clone()).await?;

        let found = get_beneficiary_by_national_id(&db, "2001").await?;
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, submitted.name);
        assert_eq!(found.phone, submitted.phone);
        assert_eq!(found.nationality, submitted.nationality);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_national_id_leaves_first_record() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_beneficiary(&db, input("Sara", "2001", "1")).await?;
        let err = create_beneficiary(&db, input("Other", "2001", "2")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "unexpected error: {err:?}");

        let page = list_beneficiaries(&db, SearchFilter::default(), Pagination::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Sara");
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_phone_and_is_literal() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_beneficiary(&db, input("Sara", "2001", "0559990000")).await?;
        create_beneficiary(&db, input("Noor_1", "2002", "0551110000")).await?;

        let by_phone = SearchFilter { search: Some("999".into()) };
        let page = list_beneficiaries(&db, by_phone, Pagination::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Sara");

        // `_` must not act as a single-character wildcard
        let underscore = SearchFilter { search: Some("r_1".into()) };
        let page = list_beneficiaries(&db, underscore, Pagination::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Noor_1");

        let wildcard = SearchFilter { search: Some("a_a".into()) };
        assert!(matches!(
            list_beneficiaries(&db, wildcard, Pagination::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn pagination_keeps_total() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..5 {
            create_beneficiary(&db, input(&format!("B{i}"), &format!("N{i}"), "0")).await?;
        }
        let page = list_beneficiaries(&db, SearchFilter::default(), Pagination::new(Some(3), Some(10))).await?;
        assert_eq!(page.total, 5);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name, "B3");

        let past_end = list_beneficiaries(&db, SearchFilter::default(), Pagination::new(Some(5), None)).await?;
        assert_eq!(past_end.total, 5);
        assert!(past_end.data.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_national_id_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = get_beneficiary_by_national_id(&db, "nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Beneficiary not found"));
        Ok(())
    }
}
