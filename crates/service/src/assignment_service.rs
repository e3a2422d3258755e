//! Employee to service-provider assignments.

use chrono::NaiveDate;
use models::employee_service_provider;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use crate::domain::{today, EmployeeServiceProviderCreate};
use crate::errors::ServiceError;

#[instrument(skip(db, input), fields(employee_id = input.employee_id, provider_id = input.provider_id))]
pub async fn create_assignment<C: ConnectionTrait>(
    db: &C,
    input: EmployeeServiceProviderCreate,
) -> Result<employee_service_provider::Model, ServiceError> {
    let assigned_at = input.assigned_at.unwrap_or_else(today);
    let created = employee_service_provider::create(db, input.employee_id, input.provider_id, assigned_at).await?;
    info!(id = created.id, "created assignment");
    Ok(created)
}

pub async fn list_assignments<C: ConnectionTrait>(db: &C) -> Result<Vec<employee_service_provider::Model>, ServiceError> {
    Ok(employee_service_provider::Entity::find()
        .order_by_asc(employee_service_provider::Column::Id)
        .all(db)
        .await?)
}

/// Assign `employees[i]` to `providers[i % providers.len()]`, one insert per
/// employee. Rows written before a failure are kept.
#[instrument(skip(db))]
pub async fn assign_round_robin<C: ConnectionTrait>(
    db: &C,
    employees: &[i32],
    providers: &[i32],
    assigned_at: NaiveDate,
) -> Result<Vec<employee_service_provider::Model>, ServiceError> {
    if providers.is_empty() {
        return Err(ServiceError::Validation("at least one provider id is required".into()));
    }
    let mut created = Vec::with_capacity(employees.len());
    for (i, &employee_id) in employees.iter().enumerate() {
        let provider_id = providers[i % providers.len()];
        let row = employee_service_provider::create(db, employee_id, provider_id, assigned_at).await?;
        created.push(row);
    }
    info!(count = created.len(), "assigned employees round-robin");
    Ok(created)
}
