//! Create `company_employees` table with FK to `companies`.
//!
//! `national_id` is unique across all employees.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyEmployee::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyEmployee::Id))
                    .col(string(CompanyEmployee::Name).not_null())
                    .col(string(CompanyEmployee::NationalId).unique_key().not_null())
                    .col(string(CompanyEmployee::JobNumber).not_null())
                    .col(string(CompanyEmployee::Nationality).not_null())
                    .col(string(CompanyEmployee::Phone).not_null())
                    .col(integer(CompanyEmployee::CompanyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_employee_company")
                            .from(CompanyEmployee::Table, CompanyEmployee::CompanyId)
                            .to(Company::Table, Company::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CompanyEmployee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CompanyEmployee {
    #[sea_orm(iden = "company_employees")]
    Table,
    Id,
    Name,
    NationalId,
    JobNumber,
    Nationality,
    Phone,
    CompanyId,
}

#[derive(DeriveIden)]
enum Company {
    #[sea_orm(iden = "companies")]
    Table,
    Id,
}
