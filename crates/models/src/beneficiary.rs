use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::suspended_beneficiary;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "beneficiaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub national_id: String,
    pub phone: String,
    pub nationality: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Suspensions }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Suspensions => Entity::has_many(suspended_beneficiary::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    national_id: &str,
    phone: &str,
    nationality: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        national_id: Set(national_id.to_string()),
        phone: Set(phone.to_string()),
        nationality: Set(nationality.to_string()),
    };
    Ok(am.insert(db).await?)
}
