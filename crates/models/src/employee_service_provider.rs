use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{company_employee, service_provider};

/// Assignment of an employee to a service provider. Duplicate pairs are allowed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_service_provider")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub provider_id: i32,
    pub assigned_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
    Provider,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::belongs_to(company_employee::Entity)
                .from(Column::EmployeeId)
                .to(company_employee::Column::Id)
                .into(),
            Relation::Provider => Entity::belongs_to(service_provider::Entity)
                .from(Column::ProviderId)
                .to(service_provider::Column::Id)
                .into(),
        }
    }
}

impl Related<company_employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<service_provider::Entity> for Entity {
    fn to() -> RelationDef { Relation::Provider.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
    provider_id: i32,
    assigned_at: Date,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        employee_id: Set(employee_id),
        provider_id: Set(provider_id),
        assigned_at: Set(assigned_at),
    };
    Ok(am.insert(db).await?)
}
