//! Create `employee_service_provider` join table.
//!
//! No uniqueness on (employee_id, provider_id): the same pair may be assigned
//! more than once.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeServiceProvider::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeServiceProvider::Id))
                    .col(integer(EmployeeServiceProvider::EmployeeId).not_null())
                    .col(integer(EmployeeServiceProvider::ProviderId).not_null())
                    .col(date(EmployeeServiceProvider::AssignedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_employee")
                            .from(EmployeeServiceProvider::Table, EmployeeServiceProvider::EmployeeId)
                            .to(CompanyEmployee::Table, CompanyEmployee::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_provider")
                            .from(EmployeeServiceProvider::Table, EmployeeServiceProvider::ProviderId)
                            .to(ServiceProvider::Table, ServiceProvider::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EmployeeServiceProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EmployeeServiceProvider {
    #[sea_orm(iden = "employee_service_provider")]
    Table,
    Id,
    EmployeeId,
    ProviderId,
    AssignedAt,
}

#[derive(DeriveIden)]
enum CompanyEmployee {
    #[sea_orm(iden = "company_employees")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ServiceProvider {
    #[sea_orm(iden = "service_providers")]
    Table,
    Id,
}
