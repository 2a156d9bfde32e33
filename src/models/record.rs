use std::borrow::Cow;

use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::openapi::schema::{AdditionalProperties, ObjectBuilder, Schema, Type};
use utoipa::openapi::RefOr;

use crate::database::StoreError;

/// A stored document as returned to clients: `_id` becomes a hex `id`,
/// every other field is passed through in relaxed extended JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TryFrom<Document> for Record {
    type Error = StoreError;

    fn try_from(mut document: Document) -> Result<Self, Self::Error> {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s,
            Some(other) => other.to_string(),
            None => return Err(StoreError::Serialization("document has no _id".to_string())),
        };

        let fields = document
            .into_iter()
            .map(|(key, value)| (key, value.into_relaxed_extjson()))
            .collect();

        Ok(Self { id, fields })
    }
}

// Stored documents are open-ended: a hex `id` plus whatever fields were written.
impl utoipa::PartialSchema for Record {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .property(
                "id",
                ObjectBuilder::new()
                    .schema_type(Type::String)
                    .description(Some("ObjectId as 24 hex chars")),
            )
            .required("id")
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .into()
    }
}

impl utoipa::ToSchema for Record {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Record")
    }
}
