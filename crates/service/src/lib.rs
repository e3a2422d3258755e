//! Data access layer for the suspension registry.
//! - Translates filter, search and pagination parameters into explicit queries.
//! - Reuses entity definitions and inserts from the `models` crate.
//! - Shapes outbound payloads (`domain`) and reports failures as `ServiceError`.

pub mod errors;
pub mod domain;
pub mod pagination;
pub mod search;
#[cfg(test)]
pub mod test_support;
pub mod company_service;
pub mod employee_service;
pub mod suspended_employee_service;
pub mod beneficiary_service;
pub mod suspended_beneficiary_service;
pub mod service_provider_service;
pub mod assignment_service;
