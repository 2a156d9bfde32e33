//! Handler bodies shared by every collection. Each one validates its
//! input, runs exactly one repository operation and wraps the result in
//! the envelope for that kind of operation.

use actix_web::HttpResponse;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::database::{DeleteOutcome, UpdateOutcome};
use crate::models::{Entity, Record, Updatable, Validate};
use crate::services::Repository;
use crate::utils::AppError;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Record>,
    pub total: usize,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SingleResponse {
    pub success: bool,
    pub data: Record,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: UpdateOutcome,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: DeleteOutcome,
}

pub fn created(id: ObjectId) -> HttpResponse {
    HttpResponse::Created().json(CreatedResponse {
        success: true,
        id: id.to_hex(),
    })
}

pub fn single(record: Record) -> HttpResponse {
    HttpResponse::Ok().json(SingleResponse {
        success: true,
        data: record,
    })
}

pub async fn create<T: Entity>(repo: &Repository<T>, entity: T) -> Result<HttpResponse, AppError> {
    entity.validate()?;
    let id = repo.create(&entity).await?;
    log::info!("✅ {} created: {}", T::LABEL, id);
    Ok(created(id))
}

pub async fn list<T: Entity>(repo: &Repository<T>) -> Result<HttpResponse, AppError> {
    let data = repo.list().await?;
    log::info!("📋 Listed {} {} documents", data.len(), T::LABEL);
    Ok(HttpResponse::Ok().json(ListResponse {
        success: true,
        total: data.len(),
        data,
    }))
}

pub async fn get<T: Entity>(repo: &Repository<T>, id: &str) -> Result<HttpResponse, AppError> {
    Ok(single(repo.get_by_id(id).await?))
}

pub async fn update<T: Updatable>(
    repo: &Repository<T>,
    id: &str,
    patch: T::Patch,
) -> Result<HttpResponse, AppError> {
    patch.validate()?;
    let outcome = repo.update_by_id(id, &patch).await?;
    if !outcome.matched {
        log::warn!("⚠️  {} {} not matched for update", T::LABEL, id);
    }
    Ok(HttpResponse::Ok().json(UpdateResponse {
        success: true,
        outcome,
    }))
}

pub async fn delete<T: Entity>(repo: &Repository<T>, id: &str) -> Result<HttpResponse, AppError> {
    let outcome = repo.delete_by_id(id).await?;
    log::info!("🗑️  {} {} deleted: {}", T::LABEL, id, outcome.deleted);
    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        outcome,
    }))
}
