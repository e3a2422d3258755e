//! Create `companies` table.
//!
//! Root entity; employees and service providers reference it. The `type`
//! column only accepts `sales` or `installation`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::Name).not_null())
                    .col(string(Company::CommercialNumber).not_null())
                    .col(string(Company::UnifiedNumber).not_null())
                    .col(
                        string_len(Company::Type, 16)
                            .not_null()
                            .check(Expr::col(Company::Type).is_in(["sales", "installation"])),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    #[sea_orm(iden = "companies")]
    Table,
    Id,
    Name,
    CommercialNumber,
    UnifiedNumber,
    Type,
}
