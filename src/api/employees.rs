use actix_web::{web, HttpResponse};

use crate::api::crud;
use crate::models::{Employee, EmployeePatch};
use crate::services::{Claims, Repository};
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/employee",
    tag = "Employees",
    responses((status = 200, description = "Every employee document", body = crud::ListResponse))
)]
pub async fn list_employees(repo: web::Data<Repository<Employee>>) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /employee");
    crud::list(&repo).await
}

#[utoipa::path(
    get,
    path = "/employee/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ObjectId")),
    responses(
        (status = 200, description = "Employee found", body = crud::SingleResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    repo: web::Data<Repository<Employee>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /employee/{}", id);
    crud::get(&repo, &id).await
}

#[utoipa::path(
    post,
    path = "/employee",
    tag = "Employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = crud::CreatedResponse),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn create_employee(
    repo: web::Data<Repository<Employee>>,
    claims: web::ReqData<Claims>,
    body: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /employee - {} by {}", body.name, claims.subject());
    crud::create(&repo, body.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/employee/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ObjectId")),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Update result", body = crud::UpdateResponse),
        (status = 400, description = "Malformed id or invalid body"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn update_employee(
    repo: web::Data<Repository<Employee>>,
    claims: web::ReqData<Claims>,
    id: web::Path<String>,
    body: web::Json<EmployeePatch>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /employee/{} by {}", id, claims.subject());
    crud::update(&repo, &id, body.into_inner()).await
}

#[utoipa::path(
    delete,
    path = "/employee/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ObjectId")),
    responses(
        (status = 200, description = "Delete result", body = crud::DeleteResponse),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn delete_employee(
    repo: web::Data<Repository<Employee>>,
    claims: web::ReqData<Claims>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /employee/{} by {}", id, claims.subject());
    crud::delete(&repo, &id).await
}
