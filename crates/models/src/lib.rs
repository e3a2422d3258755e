//! Entities for the suspension registry schema.
//!
//! Every table has an auto-increment integer key and explicit foreign-key
//! columns; cross-entity reads are done with explicit queries in `service`.

pub mod errors;
pub mod db;
pub mod company;
pub mod company_employee;
pub mod suspended_employee;
pub mod beneficiary;
pub mod suspended_beneficiary;
pub mod service_provider;
pub mod employee_service_provider;

#[cfg(test)]
mod tests;
