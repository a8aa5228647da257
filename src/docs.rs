use crate::gateway::wire::ApiEmployee;
use crate::model::contract::Contract;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Dashboard Development API",
        version = "0.1.0",
        description = r#"
In-memory stand-in for the HR backend used by the dashboard.

- **Employees**: list, view, add (multipart with optional picture), replace and remove
- **Contracts**: the active contract of an employee

Records live in memory and are reset on restart. When `REQUIRE_AUTH=true`,
requests need the bearer token issued by the dashboard login.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::get_employee_image,
        crate::api::contract::get_active_contract
    ),
    components(schemas(ApiEmployee, Contract)),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Contract", description = "Employment contracts"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_contract_response_references_contract_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let response = &doc["paths"]["/api/employees/{id}/contracts/active"]["get"]["responses"]["200"];
        assert_eq!(
            &response["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/Contract"
        );
        assert!(doc["components"]["schemas"]["Contract"].is_object());
        assert!(doc["components"]["schemas"]["ApiEmployee"].is_object());
    }
}
