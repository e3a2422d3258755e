use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::company_employee;
use crate::errors::ModelError;

/// One suspension event. An employee may have any number of these.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suspended_employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub suspended_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Employee }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::belongs_to(company_employee::Entity)
                .from(Column::EmployeeId)
                .to(company_employee::Column::Id)
                .into(),
        }
    }
}

impl Related<company_employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, employee_id: i32, suspended_at: Date) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        employee_id: Set(employee_id),
        suspended_at: Set(suspended_at),
    };
    Ok(am.insert(db).await?)
}
