use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use super::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};

/// In-process collection used by the tests. Mirrors the driver's
/// behaviour for unique fields, `$set` and delete results.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Document>>,
    unique_fields: Vec<&'static str>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unique(field: &'static str) -> Self {
        Self {
            unique_fields: vec![field],
            ..Self::default()
        }
    }

    /// Number of store operations served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(stored)) if stored == id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, document: Document) -> Result<(), StoreError> {
        self.touch();
        let mut documents = self.documents.lock().unwrap();

        for field in &self.unique_fields {
            if let Some(value) = document.get(*field) {
                if documents.iter().any(|d| d.get(*field) == Some(value)) {
                    return Err(StoreError::DuplicateKey(format!("{} already exists", field)));
                }
            }
        }

        documents.push(document);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        self.touch();
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn find_one_by(&self, field: &str, value: Bson) -> Result<Option<Document>, StoreError> {
        self.touch();
        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().find(|d| d.get(field) == Some(&value)).cloned())
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> Result<UpdateOutcome, StoreError> {
        self.touch();
        let mut documents = self.documents.lock().unwrap();

        let Some(document) = documents.iter_mut().find(|d| has_id(d, &id)) else {
            return Ok(UpdateOutcome { matched: false, modified: false });
        };

        let mut modified = false;
        for (key, value) in fields {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome { matched: true, modified })
    }

    async fn delete_one(&self, id: ObjectId) -> Result<DeleteOutcome, StoreError> {
        self.touch();
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        if let Some(pos) = documents.iter().position(|d| has_id(d, &id)) {
            documents.remove(pos);
        }
        Ok(DeleteOutcome {
            deleted: documents.len() < before,
        })
    }
}
