//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_company;
mod m20240101_000002_create_company_employee;
mod m20240101_000003_create_suspended_employee;
mod m20240101_000004_create_beneficiary;
mod m20240101_000005_create_suspended_beneficiary;
mod m20240101_000006_create_service_provider;
mod m20240101_000007_create_employee_service_provider;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_company::Migration),
            Box::new(m20240101_000002_create_company_employee::Migration),
            Box::new(m20240101_000003_create_suspended_employee::Migration),
            Box::new(m20240101_000004_create_beneficiary::Migration),
            Box::new(m20240101_000005_create_suspended_beneficiary::Migration),
            Box::new(m20240101_000006_create_service_provider::Migration),
            Box::new(m20240101_000007_create_employee_service_provider::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn up_then_down_on_sqlite() -> Result<(), DbErr> {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await?;

        Migrator::up(&db, None).await?;
        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'seaql_%' AND name NOT LIKE 'sqlite_%'".to_string(),
            ))
            .await?;
        assert_eq!(rows.len(), 7);

        Migrator::down(&db, None).await?;
        let rows = db
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'companies'".to_string(),
            ))
            .await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
