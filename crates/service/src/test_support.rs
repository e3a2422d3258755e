#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::company::{self, CompanyType};
use models::company_employee::{self, NewEmployee};
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// In-memory SQLite with migrations applied; one pooled connection so every
/// query sees the same database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_company(db: &DatabaseConnection, name: &str, unified_number: &str, company_type: CompanyType) -> Result<company::Model, anyhow::Error> {
    Ok(company::create(db, name, &format!("CR-{unified_number}"), unified_number, company_type).await?)
}

pub async fn seed_employee(db: &DatabaseConnection, name: &str, national_id: &str, company_id: i32) -> Result<company_employee::Model, anyhow::Error> {
    let job_number = format!("JOB-{national_id}");
    let new = NewEmployee {
        name,
        national_id,
        job_number: &job_number,
        nationality: "SA",
        phone: "0500000000",
        company_id,
    };
    Ok(company_employee::create(db, new).await?)
}
