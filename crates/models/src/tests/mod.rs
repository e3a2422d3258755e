/// Connection setup shared by the database tests
pub mod support;
