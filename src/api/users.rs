use actix_web::{web, HttpResponse};

use crate::api::crud;
use crate::models::{User, Validate};
use crate::services::{Claims, Repository};
use crate::utils::AppError;

/// POST /users - signup; 409 when the email is taken
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = crud::CreatedResponse),
        (status = 400, description = "Invalid body"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn create_user(
    repo: web::Data<Repository<User>>,
    body: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users - email: {}", body.email);

    let user = body.into_inner();
    user.validate()?;
    let id = repo.create_user(&user).await?;

    log::info!("✅ User registered: {}", user.email);
    Ok(crud::created(id))
}

#[utoipa::path(
    get,
    path = "/user/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Registered email")),
    responses(
        (status = 200, description = "User found", body = crud::SingleResponse),
        (status = 401, description = "Missing or invalid credential"),
        (status = 404, description = "User not found")
    ),
    security(("cookie_auth" = []))
)]
pub async fn get_user(
    repo: web::Data<Repository<User>>,
    claims: web::ReqData<Claims>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /user/{} by {}", email, claims.subject());
    Ok(crud::single(repo.find_by_email(&email).await?))
}
