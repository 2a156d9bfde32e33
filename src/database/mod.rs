use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub mod memory;

/// MongoDB error code for unique index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
            if write_error.code == DUPLICATE_KEY_CODE {
                return StoreError::DuplicateKey(write_error.message.clone());
            }
        }
        StoreError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct UpdateOutcome {
    pub matched: bool,
    pub modified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct DeleteOutcome {
    pub deleted: bool,
}

/// Operations the repositories need from one collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, document: Document) -> Result<(), StoreError>;

    async fn find_all(&self) -> Result<Vec<Document>, StoreError>;

    /// First document whose `field` equals `value`.
    async fn find_one_by(&self, field: &str, value: Bson) -> Result<Option<Document>, StoreError>;

    /// `$set` of `fields` on the document with `_id == id`.
    async fn set_fields(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, StoreError>;

    async fn delete_one(&self, id: ObjectId) -> Result<DeleteOutcome, StoreError>;
}

#[async_trait]
impl DocumentStore for Collection<Document> {
    async fn insert_one(&self, document: Document) -> Result<(), StoreError> {
        Collection::insert_one(self, document).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one_by(&self, field: &str, value: Bson) -> Result<Option<Document>, StoreError> {
        let mut filter = Document::new();
        filter.insert(field, value);
        Ok(self.find_one(filter).await?)
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count > 0,
            modified: result.modified_count > 0,
        })
    }

    async fn delete_one(&self, id: ObjectId) -> Result<DeleteOutcome, StoreError> {
        let result = Collection::delete_one(self, doc! { "_id": id }).await?;
        Ok(DeleteOutcome {
            deleted: result.deleted_count > 0,
        })
    }
}

/// Process-wide database handle. Connected once in `main`, cloned into
/// every worker, shut down after the HTTP server stops.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some("food-service".to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;

        let mongodb = Self { client, db };
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Unique email index on `users`. Signup also checks before inserting,
    /// but only the index holds under concurrent signups.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let users = self.collection("users");
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index ready: users(email) unique"),
            Err(e) => log::warn!("   ⚠️  Could not create users(email) index: {}", e),
        }
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    pub async fn shutdown(self) {
        log::info!("🔌 Closing MongoDB connections...");
        self.client.shutdown().await;
    }
}
