//! Create `suspended_employees` table with FK to `company_employees`.
//!
//! One row per suspension event; repeated suspensions are allowed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuspendedEmployee::Table)
                    .if_not_exists()
                    .col(pk_auto(SuspendedEmployee::Id))
                    .col(integer(SuspendedEmployee::EmployeeId).not_null())
                    .col(date(SuspendedEmployee::SuspendedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suspended_employee_employee")
                            .from(SuspendedEmployee::Table, SuspendedEmployee::EmployeeId)
                            .to(CompanyEmployee::Table, CompanyEmployee::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SuspendedEmployee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SuspendedEmployee {
    #[sea_orm(iden = "suspended_employees")]
    Table,
    Id,
    EmployeeId,
    SuspendedAt,
}

#[derive(DeriveIden)]
enum CompanyEmployee {
    #[sea_orm(iden = "company_employees")]
    Table,
    Id,
}
