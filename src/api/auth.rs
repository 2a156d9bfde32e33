use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::services::TokenService;
use crate::utils::AppError;

/// POST /jwt - sign the posted identity and hand it back as a cookie
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    description = "Body: any JSON object describing the identity, e.g. `{\"email\": \"a@b.com\"}`",
    responses(
        (status = 200, description = "Cookie `token` set"),
        (status = 400, description = "Body is not a JSON object")
    )
)]
pub async fn issue_token(
    tokens: web::Data<TokenService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let identity = body.into_inner();
    let who = identity.get("email").and_then(Value::as_str).unwrap_or("unknown").to_string();
    log::info!("🔐 POST /jwt - {}", who);

    let token = tokens.issue(identity)?;

    Ok(HttpResponse::Ok()
        .cookie(tokens.session_cookie(token))
        .json(serde_json::json!({ "success": true })))
}

/// POST /logout - expire the cookie; the token itself stays valid until `exp`
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    responses((status = 200, description = "Cookie `token` cleared"))
)]
pub async fn logout(tokens: web::Data<TokenService>) -> HttpResponse {
    log::info!("👋 POST /logout");
    HttpResponse::Ok()
        .cookie(tokens.cleared_cookie())
        .json(serde_json::json!({ "success": true }))
}
