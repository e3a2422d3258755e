use models::service_provider;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use crate::domain::ServiceProviderCreate;
use crate::errors::ServiceError;

#[instrument(skip(db, input), fields(company_id = input.company_id))]
pub async fn create_service_provider<C: ConnectionTrait>(
    db: &C,
    input: ServiceProviderCreate,
) -> Result<service_provider::Model, ServiceError> {
    let created = service_provider::create(db, &input.name, &input.code, input.company_id).await?;
    info!(id = created.id, "created service provider");
    Ok(created)
}

/// All providers in id order; an empty list is not an error.
pub async fn list_service_providers<C: ConnectionTrait>(db: &C) -> Result<Vec<service_provider::Model>, ServiceError> {
    Ok(service_provider::Entity::find()
        .order_by_asc(service_provider::Column::Id)
        .all(db)
        .await?)
}
