use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::models::{Employee, Entity, Food, User};

/// Liveness report; does not touch the database.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Collections this instance serves.
    pub collections: [&'static str; 3],
    /// RFC 3339, UTC.
    pub checked_at: String,
}

impl HealthReport {
    fn now() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            collections: [User::COLLECTION, Food::COLLECTION, Employee::COLLECTION],
            checked_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }
}

/// GET / - liveness
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Welcome text"))
)]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("Hello Boss!")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Process is up", body = HealthReport))
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthReport::now())
}
