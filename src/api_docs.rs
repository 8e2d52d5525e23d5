use crate::api;
use crate::models::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::employee::create_employee,
        api::employee::list_employees,
        api::employee::get_employee,
        api::employee::update_employee,
        api::employee::delete_employee,
    ),
    components(schemas(Employee)),
    tags(
        (name = "employee-service", description = "Employee directory API")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_employee_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/employees"));
        assert!(doc.paths.paths.contains_key("/api/employees/{id}"));
        assert!(doc.paths.paths.contains_key("/api/health"));
    }
}
