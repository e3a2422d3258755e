//! Create `service_providers` table with FK to `companies`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProvider::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceProvider::Id))
                    .col(string(ServiceProvider::Name).not_null())
                    .col(string(ServiceProvider::Code).not_null())
                    .col(integer(ServiceProvider::CompanyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_provider_company")
                            .from(ServiceProvider::Table, ServiceProvider::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider {
    #[sea_orm(iden = "service_providers")]
    Table,
    Id,
    Name,
    Code,
    CompanyId,
}

#[derive(DeriveIden)]
enum Company {
    #[sea_orm(iden = "companies")]
    Table,
    Id,
}
