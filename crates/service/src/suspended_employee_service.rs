use std::collections::HashMap;

use models::{company, company_employee, suspended_employee};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};
use tracing::{info, instrument};

use crate::domain::{today, EmployeeWithCompany, SuspendedEmployeeCreate, SuspendedEmployeeFilter, SuspendedEmployeeOut};
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};
use crate::search::{self, lowered};

/// Record a suspension for an employee; the date defaults to today.
#[instrument(skip(db, input), fields(employee_id = input.employee_id))]
pub async fn create_suspended_employee<C: ConnectionTrait>(
    db: &C,
    input: SuspendedEmployeeCreate,
) -> Result<SuspendedEmployeeOut, ServiceError> {
    let suspended_at = input.suspended_at.unwrap_or_else(today);
    let row = suspended_employee::create(db, input.employee_id, suspended_at).await?;
    info!(id = row.id, "created suspended employee");
    let mut employees = load_employees(db, &[row.employee_id]).await?;
    let employee = take_employee(&mut employees, row.employee_id)?;
    Ok(SuspendedEmployeeOut::new(row, employee))
}

/// List suspensions with the employee and its company nested.
#[instrument(skip(db))]
pub async fn list_suspended_employees<C: ConnectionTrait>(
    db: &C,
    filter: SuspendedEmployeeFilter,
    opts: Pagination,
) -> Result<Page<SuspendedEmployeeOut>, ServiceError> {
    let mut select = suspended_employee::Entity::find()
        .join(JoinType::InnerJoin, suspended_employee::Relation::Employee.def())
        .join(JoinType::InnerJoin, company_employee::Relation::Company.def());
    if let Some(t) = filter.company_type {
        select = select.filter(company::Column::CompanyType.eq(t));
    }
    if let Some(term) = search::term(filter.search.as_deref()) {
        select = select.filter(search::matches_any(
            [
                lowered((company_employee::Entity, company_employee::Column::Name)),
                lowered((company_employee::Entity, company_employee::Column::NationalId)),
                lowered((company_employee::Entity, company_employee::Column::JobNumber)),
            ],
            term,
        ));
    }
    let select = select.order_by_asc(suspended_employee::Column::Id);
    let page = fetch_page(db, select, opts, || ServiceError::NotFound("No suspended employees found".into())).await?;

    let Page { total, data: rows } = page;
    let ids: Vec<i32> = rows.iter().map(|r| r.employee_id).collect();
    let employees = load_employees(db, &ids).await?;
    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let employee = employees
            .get(&row.employee_id)
            .cloned()
            .ok_or_else(|| ServiceError::Db(format!("employee {} missing for suspension {}", row.employee_id, row.id)))?;
        data.push(SuspendedEmployeeOut::new(row, employee));
    }
    Ok(Page { total, data })
}

/// Employees by id with their companies attached.
async fn load_employees<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<HashMap<i32, EmployeeWithCompany>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let employees = company_employee::Entity::find()
        .filter(company_employee::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    let company_ids: Vec<i32> = employees.iter().map(|e| e.company_id).collect();
    let companies: HashMap<i32, company::Model> = company::Entity::find()
        .filter(company::Column::Id.is_in(company_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let mut out = HashMap::with_capacity(employees.len());
    for e in employees {
        let company = companies
            .get(&e.company_id)
            .ok_or_else(|| ServiceError::Db(format!("company {} missing for employee {}", e.company_id, e.id)))?;
        out.insert(e.id, EmployeeWithCompany::new(e, company));
    }
    Ok(out)
}

fn take_employee(map: &mut HashMap<i32, EmployeeWithCompany>, id: i32) -> Result<EmployeeWithCompany, ServiceError> {
    map.remove(&id).ok_or_else(|| ServiceError::not_found("Company Employee"))
}
