use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CompanyCreateDoc {
    pub name: String,
    pub commercial_number: String,
    pub unified_number: String,
    /// `sales` or `installation`
    #[schema(rename = "type")]
    pub company_type: String,
}

#[derive(ToSchema)]
pub struct CompanyEmployeeCreateDoc {
    pub name: String,
    pub national_id: String,
    pub job_number: String,
    pub nationality: String,
    pub phone: String,
    pub company_id: i32,
}

#[derive(ToSchema)]
pub struct SuspendedEmployeeCreateDoc {
    pub employee_id: i32,
    /// `YYYY-MM-DD`, defaults to today
    pub suspended_at: Option<String>,
}

#[derive(ToSchema)]
pub struct BeneficiaryCreateDoc {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub nationality: String,
}

#[derive(ToSchema)]
pub struct SuspendedBeneficiaryCreateDoc {
    pub beneficiary_id: i32,
    /// `YYYY-MM-DD`, defaults to today
    pub suspended_at: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceProviderCreateDoc {
    pub name: String,
    pub code: String,
    pub company_id: i32,
}

#[derive(ToSchema)]
pub struct EmployeeServiceProviderCreateDoc {
    pub employee_id: i32,
    pub provider_id: i32,
    /// `YYYY-MM-DD`, defaults to today
    pub assigned_at: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::banner,
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::list_sales,
        crate::routes::companies::list_installation,
        crate::routes::companies::get_by_unified_number,
        crate::routes::companies::create,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::suspended_employees::list,
        crate::routes::suspended_employees::create,
        crate::routes::beneficiaries::list,
        crate::routes::beneficiaries::get_by_national_id,
        crate::routes::beneficiaries::create,
        crate::routes::suspended_beneficiaries::list,
        crate::routes::suspended_beneficiaries::get,
        crate::routes::suspended_beneficiaries::create,
        crate::routes::service_providers::list,
        crate::routes::service_providers::create,
        crate::routes::assignments::list,
        crate::routes::assignments::create,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyCreateDoc,
            CompanyEmployeeCreateDoc,
            SuspendedEmployeeCreateDoc,
            BeneficiaryCreateDoc,
            SuspendedBeneficiaryCreateDoc,
            ServiceProviderCreateDoc,
            EmployeeServiceProviderCreateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "employees"),
        (name = "beneficiaries"),
        (name = "suspensions"),
        (name = "providers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/companies", "/companies/{unified_number}", "/suspended_beneficiaries", "/employee_service_provider"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
