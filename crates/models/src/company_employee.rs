use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{company, employee_service_provider, suspended_employee};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub national_id: String,
    pub job_number: String,
    pub nationality: String,
    pub phone: String,
    pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
    Suspensions,
    Assignments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
            Relation::Suspensions => Entity::has_many(suspended_employee::Entity).into(),
            Relation::Assignments => Entity::has_many(employee_service_provider::Entity).into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when hiring an employee into a company.
#[derive(Clone, Debug)]
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub national_id: &'a str,
    pub job_number: &'a str,
    pub nationality: &'a str,
    pub phone: &'a str,
    pub company_id: i32,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewEmployee<'_>) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(new.name.to_string()),
        national_id: Set(new.national_id.to_string()),
        job_number: Set(new.job_number.to_string()),
        nationality: Set(new.nationality.to_string()),
        phone: Set(new.phone.to_string()),
        company_id: Set(new.company_id),
    };
    Ok(am.insert(db).await?)
}
