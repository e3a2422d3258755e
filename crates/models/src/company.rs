use std::fmt;
use std::str::FromStr;

use sea_orm::sea_query::StringLen;
use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::ModelError;
use crate::{company_employee, service_provider};

/// Kind of business a company runs. Stored as `sales` / `installation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    #[sea_orm(string_value = "sales")]
    Sales,
    #[sea_orm(string_value = "installation")]
    Installation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid company type '{0}'; use 'sales' or 'installation'")]
pub struct ParseCompanyTypeError(pub String);

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Sales => "sales",
            CompanyType::Installation => "installation",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = ParseCompanyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(CompanyType::Sales),
            "installation" => Ok(CompanyType::Installation),
            other => Err(ParseCompanyTypeError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub commercial_number: String,
    pub unified_number: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employees,
    ServiceProviders,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employees => Entity::has_many(company_employee::Entity).into(),
            Relation::ServiceProviders => Entity::has_many(service_provider::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    commercial_number: &str,
    unified_number: &str,
    company_type: CompanyType,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        commercial_number: Set(commercial_number.to_string()),
        unified_number: Set(unified_number.to_string()),
        company_type: Set(company_type),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types() {
        assert_eq!("sales".parse::<CompanyType>().unwrap(), CompanyType::Sales);
        assert_eq!("installation".parse::<CompanyType>().unwrap(), CompanyType::Installation);
    }

    #[test]
    fn rejects_unknown_type() {
        let err = "wholesale".parse::<CompanyType>().unwrap_err();
        assert_eq!(err, ParseCompanyTypeError("wholesale".into()));
        assert!(err.to_string().contains("'sales' or 'installation'"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CompanyType::Installation).unwrap();
        assert_eq!(json, "\"installation\"");
        assert!(serde_json::from_str::<CompanyType>("\"wholesale\"").is_err());
    }

    #[test]
    fn model_serializes_type_field() {
        let m = Model {
            id: 1,
            name: "Acme".into(),
            commercial_number: "C-1".into(),
            unified_number: "U-1".into(),
            company_type: CompanyType::Sales,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["type"], "sales");
        assert!(v.get("company_type").is_none());
    }
}
