//! Request and response contract.
//!
//! Create payloads carry exactly the creatable fields of each entity (no id);
//! dates are optional and default to today's date. List filters are plain
//! structs built by the routing layer from query parameters.

use chrono::{NaiveDate, Utc};
use models::company::{self, CompanyType};
use models::{beneficiary, company_employee, suspended_beneficiary, suspended_employee};
use serde::{Deserialize, Serialize};

/// Creation date used when a payload omits one.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompanyCreate {
    pub name: String,
    pub commercial_number: String,
    pub unified_number: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompanyEmployeeCreate {
    pub name: String,
    pub national_id: String,
    pub job_number: String,
    pub nationality: String,
    pub phone: String,
    pub company_id: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SuspendedEmployeeCreate {
    pub employee_id: i32,
    #[serde(default)]
    pub suspended_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BeneficiaryCreate {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub nationality: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SuspendedBeneficiaryCreate {
    pub beneficiary_id: i32,
    #[serde(default)]
    pub suspended_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ServiceProviderCreate {
    pub name: String,
    pub code: String,
    pub company_id: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeServiceProviderCreate {
    pub employee_id: i32,
    pub provider_id: i32,
    #[serde(default)]
    pub assigned_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default)]
pub struct CompanyFilter {
    pub company_type: Option<CompanyType>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub company_id: Option<i32>,
    pub company_type: Option<CompanyType>,
}

#[derive(Clone, Debug, Default)]
pub struct SuspendedEmployeeFilter {
    pub search: Option<String>,
    pub company_type: Option<CompanyType>,
}

/// Filter for lists that only support free-text search.
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompanySummary {
    pub id: i32,
    pub name: String,
}

impl From<&company::Model> for CompanySummary {
    fn from(c: &company::Model) -> Self {
        Self { id: c.id, name: c.name.clone() }
    }
}

/// Employee with its parent company in place of `company_id`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeWithCompany {
    pub id: i32,
    pub name: String,
    pub national_id: String,
    pub job_number: String,
    pub nationality: String,
    pub phone: String,
    pub company: CompanySummary,
}

impl EmployeeWithCompany {
    pub fn new(e: company_employee::Model, company: &company::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            national_id: e.national_id,
            job_number: e.job_number,
            nationality: e.nationality,
            phone: e.phone,
            company: company.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SuspendedEmployeeOut {
    pub id: i32,
    pub suspended_at: NaiveDate,
    pub employee: EmployeeWithCompany,
}

impl SuspendedEmployeeOut {
    pub fn new(row: suspended_employee::Model, employee: EmployeeWithCompany) -> Self {
        Self { id: row.id, suspended_at: row.suspended_at, employee }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SuspendedBeneficiaryWithBeneficiary {
    pub id: i32,
    pub beneficiary_id: i32,
    pub suspended_at: NaiveDate,
    pub beneficiary: beneficiary::Model,
}

impl SuspendedBeneficiaryWithBeneficiary {
    pub fn new(row: suspended_beneficiary::Model, beneficiary: beneficiary::Model) -> Self {
        Self { id: row.id, beneficiary_id: row.beneficiary_id, suspended_at: row.suspended_at, beneficiary }
    }
}
