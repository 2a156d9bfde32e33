use std::marker::PhantomData;
use std::sync::Arc;

use mongodb::bson::{self, oid::ObjectId, Bson, Document};

use crate::database::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use crate::models::{normalize_email, Entity, Record, Updatable, User};
use crate::utils::AppError;

/// Data access for one collection of `T` documents.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

/// Rejects anything that is not a 24 character hex ObjectId.
pub fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidArgument("Invalid ID format".to_string()))
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn create(&self, entity: &T) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        let mut document = Document::new();
        document.insert("_id", id);
        for (key, value) in bson::to_document(entity).map_err(StoreError::from)? {
            document.insert(key, value);
        }

        self.store.insert_one(document).await?;
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Record>, AppError> {
        let documents = self.store.find_all().await?;
        let records = documents
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Record, AppError> {
        let oid = parse_id(id)?;
        self.find_one_by("_id", Bson::ObjectId(oid)).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError> {
        let oid = parse_id(id)?;
        Ok(self.store.delete_one(oid).await?)
    }

    async fn find_one_by(&self, field: &str, value: Bson) -> Result<Record, AppError> {
        match self.store.find_one_by(field, value).await? {
            Some(document) => Ok(Record::try_from(document)?),
            None => Err(AppError::NotFound(format!("{} not found", T::LABEL))),
        }
    }
}

impl<T: Updatable> Repository<T> {
    /// `$set` only the fields present in `patch`. Zero matches is reported,
    /// not raised.
    pub async fn update_by_id(&self, id: &str, patch: &T::Patch) -> Result<UpdateOutcome, AppError> {
        let oid = parse_id(id)?;
        let fields = bson::to_document(patch).map_err(StoreError::from)?;
        if fields.is_empty() {
            return Err(AppError::InvalidArgument("No fields to update".to_string()));
        }
        Ok(self.store.set_fields(oid, fields).await?)
    }
}

impl Repository<User> {
    /// Insert a user unless the email is already registered. Emails are
    /// stored and compared normalized. The lookup gives a clean 409; the
    /// unique index catches concurrent signups.
    pub async fn create_user(&self, user: &User) -> Result<ObjectId, AppError> {
        let user = user.normalized();
        if self.store.find_one_by("email", Bson::String(user.email.clone())).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        self.create(&user).await.map_err(|e| match e {
            AppError::Conflict(_) => AppError::Conflict("User already exists".to_string()),
            other => other,
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Record, AppError> {
        self.find_one_by("email", Bson::String(normalize_email(email))).await
    }
}
