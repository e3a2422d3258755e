use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::beneficiary;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suspended_beneficiaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beneficiary_id: i32,
    pub suspended_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Beneficiary }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Beneficiary => Entity::belongs_to(beneficiary::Entity)
                .from(Column::BeneficiaryId)
                .to(beneficiary::Column::Id)
                .into(),
        }
    }
}

impl Related<beneficiary::Entity> for Entity {
    fn to() -> RelationDef { Relation::Beneficiary.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, beneficiary_id: i32, suspended_at: Date) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        beneficiary_id: Set(beneficiary_id),
        suspended_at: Set(suspended_at),
    };
    Ok(am.insert(db).await?)
}
