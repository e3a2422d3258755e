//! Create `suspended_beneficiaries` table with FK to `beneficiaries`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuspendedBeneficiary::Table)
                    .if_not_exists()
                    .col(pk_auto(SuspendedBeneficiary::Id))
                    .col(integer(SuspendedBeneficiary::BeneficiaryId).not_null())
                    .col(date(SuspendedBeneficiary::SuspendedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suspended_beneficiary_beneficiary")
                            .from(SuspendedBeneficiary::Table, SuspendedBeneficiary::BeneficiaryId)
                            .to(Beneficiary::Table, Beneficiary::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SuspendedBeneficiary::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SuspendedBeneficiary {
    #[sea_orm(iden = "suspended_beneficiaries")]
    Table,
    Id,
    BeneficiaryId,
    SuspendedAt,
}

#[derive(DeriveIden)]
enum Beneficiary {
    #[sea_orm(iden = "beneficiaries")]
    Table,
    Id,
}
