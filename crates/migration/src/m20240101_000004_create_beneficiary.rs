//! Create `beneficiaries` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beneficiary::Table)
                    .if_not_exists()
                    .col(pk_auto(Beneficiary::Id))
                    .col(string(Beneficiary::Name).not_null())
                    .col(string(Beneficiary::NationalId).unique_key().not_null())
                    .col(string(Beneficiary::Phone).not_null())
                    .col(string(Beneficiary::Nationality).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Beneficiary::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Beneficiary {
    #[sea_orm(iden = "beneficiaries")]
    Table,
    Id,
    Name,
    NationalId,
    Phone,
    Nationality,
}
