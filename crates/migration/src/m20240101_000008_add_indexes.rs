use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Companies: name search and point lookup by unified number
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_name")
                    .table(Company::Table)
                    .col(Company::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_unified_number")
                    .table(Company::Table)
                    .col(Company::UnifiedNumber)
                    .to_owned(),
            )
            .await?;

        // Employees: filter by company
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_employee_company")
                    .table(CompanyEmployee::Table)
                    .col(CompanyEmployee::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_suspended_employee_employee")
                    .table(SuspendedEmployee::Table)
                    .col(SuspendedEmployee::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_beneficiary_name")
                    .table(Beneficiary::Table)
                    .col(Beneficiary::Name)
                    .to_owned(),
            )
            .await?;

        // Suspended beneficiaries are listed newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_suspended_beneficiary_suspended_at")
                    .table(SuspendedBeneficiary::Table)
                    .col(SuspendedBeneficiary::SuspendedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let drops = [
            ("idx_suspended_beneficiary_suspended_at", SuspendedBeneficiary::Table.into_iden()),
            ("idx_beneficiary_name", Beneficiary::Table.into_iden()),
            ("idx_suspended_employee_employee", SuspendedEmployee::Table.into_iden()),
            ("idx_company_employee_company", CompanyEmployee::Table.into_iden()),
            ("idx_company_unified_number", Company::Table.into_iden()),
            ("idx_company_name", Company::Table.into_iden()),
        ];
        for (name, table) in drops {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Company {
    #[sea_orm(iden = "companies")]
    Table,
    Name,
    UnifiedNumber,
}

#[derive(DeriveIden)]
enum CompanyEmployee {
    #[sea_orm(iden = "company_employees")]
    Table,
    CompanyId,
}

#[derive(DeriveIden)]
enum SuspendedEmployee {
    #[sea_orm(iden = "suspended_employees")]
    Table,
    EmployeeId,
}

#[derive(DeriveIden)]
enum Beneficiary {
    #[sea_orm(iden = "beneficiaries")]
    Table,
    Name,
}

#[derive(DeriveIden)]
enum SuspendedBeneficiary {
    #[sea_orm(iden = "suspended_beneficiaries")]
    Table,
    SuspendedAt,
}
