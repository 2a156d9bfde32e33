use actix_web::{web, HttpResponse};

use crate::api::crud;
use crate::models::{Food, FoodPatch};
use crate::services::{Claims, Repository};
use crate::utils::AppError;

/// GET /food - full menu, unpaginated
#[utoipa::path(
    get,
    path = "/food",
    tag = "Foods",
    responses(
        (status = 200, description = "Every food document", body = crud::ListResponse),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_foods(repo: web::Data<Repository<Food>>) -> Result<HttpResponse, AppError> {
    log::info!("🍽️  GET /food");
    crud::list(&repo).await
}

#[utoipa::path(
    get,
    path = "/food/{id}",
    tag = "Foods",
    params(("id" = String, Path, description = "Food ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Food found", body = crud::SingleResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_food(
    repo: web::Data<Repository<Food>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🍽️  GET /food/{}", id);
    crud::get(&repo, &id).await
}

#[utoipa::path(
    post,
    path = "/food",
    tag = "Foods",
    request_body = Food,
    responses(
        (status = 201, description = "Food created", body = crud::CreatedResponse),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn create_food(
    repo: web::Data<Repository<Food>>,
    claims: web::ReqData<Claims>,
    body: web::Json<Food>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /food - {} by {}", body.name, claims.subject());
    crud::create(&repo, body.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/food/{id}",
    tag = "Foods",
    params(("id" = String, Path, description = "Food ObjectId (24 hex chars)")),
    request_body = FoodPatch,
    responses(
        (status = 200, description = "Update result", body = crud::UpdateResponse),
        (status = 400, description = "Malformed id or invalid body"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn update_food(
    repo: web::Data<Repository<Food>>,
    claims: web::ReqData<Claims>,
    id: web::Path<String>,
    body: web::Json<FoodPatch>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /food/{} by {}", id, claims.subject());
    crud::update(&repo, &id, body.into_inner()).await
}

#[utoipa::path(
    delete,
    path = "/food/{id}",
    tag = "Foods",
    params(("id" = String, Path, description = "Food ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Delete result", body = crud::DeleteResponse),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid credential")
    ),
    security(("cookie_auth" = []))
)]
pub async fn delete_food(
    repo: web::Data<Repository<Food>>,
    claims: web::ReqData<Claims>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /food/{} by {}", id, claims.subject());
    crud::delete(&repo, &id).await
}
