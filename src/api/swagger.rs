use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Service API",
        version = "1.0.0",
        description = "Restaurant backend: users, foods and employees.\n\n**Authentication:** `POST /jwt` sets an HTTP-only `token` cookie. Write endpoints and user lookup require it (a `Bearer` header is accepted too)."
    ),
    paths(
        // Health
        crate::api::health::welcome,
        crate::api::health::health_check,

        // Auth
        crate::api::auth::issue_token,
        crate::api::auth::logout,

        // Users
        crate::api::users::create_user,
        crate::api::users::get_user,

        // Foods
        crate::api::foods::list_foods,
        crate::api::foods::get_food,
        crate::api::foods::create_food,
        crate::api::foods::update_food,
        crate::api::foods::delete_food,

        // Employees
        crate::api::employees::list_employees,
        crate::api::employees::get_employee,
        crate::api::employees::create_employee,
        crate::api::employees::update_employee,
        crate::api::employees::delete_employee,
    ),
    components(
        schemas(
            crate::api::health::HealthReport,
            crate::api::crud::CreatedResponse,
            crate::api::crud::ListResponse,
            crate::api::crud::SingleResponse,
            crate::models::Record,
            crate::api::crud::UpdateResponse,
            crate::api::crud::DeleteResponse,
            crate::models::User,
            crate::models::Food,
            crate::models::FoodPatch,
            crate::models::Employee,
            crate::models::EmployeePatch,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints."),
        (name = "Auth", description = "Credential cookie issue and logout."),
        (name = "Users", description = "Signup and lookup by email."),
        (name = "Foods", description = "Menu CRUD."),
        (name = "Employees", description = "Staff CRUD."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::services::TOKEN_COOKIE,
                ))),
            );
        }
    }
}
