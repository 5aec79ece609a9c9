//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoStore<T>`, a `DocumentStore<T>` backed by a
//! `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag.
//!
//! # Storage model
//!
//! One collection per entity type, named by `T::resource_name()`
//! ("movies", "directors").
//!
//! # Serialization strategy
//!
//! Entities go through `serde_json::Value` before BSON, so UUIDs are stored
//! as strings. The `id` field is mapped to MongoDB's `_id`.

use crate::core::{DocumentStore, Entity, EntityPatch, EntityError, Filter, StorageError};
use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Database};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a JSON object into a BSON document, renaming `id` → `_id`.
fn json_to_document(json: serde_json::Value) -> std::result::Result<Document, String> {
    let bson_val =
        mongodb::bson::to_bson(&json).map_err(|e| format!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err("Expected BSON document, got non-object".to_string()),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON document back into JSON, renaming `_id` → `id`.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

/// Convert an equality filter into a MongoDB query document.
fn filter_to_document(filter: &Filter) -> std::result::Result<Document, String> {
    let mut query = Document::new();
    for (field, value) in filter.conditions() {
        let key = if field == "id" { "_id" } else { field.as_str() };
        let bson = mongodb::bson::to_bson(&value.to_json())
            .map_err(|e| format!("Failed to convert filter value: {}", e))?;
        query.insert(key, bson);
    }
    Ok(query)
}

/// Create a MongoDB client and select a database.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| StorageError::Connection {
            backend: "mongodb".to_string(),
            message: e.to_string(),
        })?;

    tracing::info!(database, "MongoDB client ready");

    Ok(client.database(database))
}

// ---------------------------------------------------------------------------
// MongoStore<T>
// ---------------------------------------------------------------------------

/// Document store backed by one MongoDB collection.
///
/// # Example
///
/// ```rust,ignore
/// use cinegraph::storage::{MongoStore, mongodb::connect};
///
/// let db = connect("mongodb://localhost:27017", "cinegraph").await?;
/// let movies = MongoStore::<Movie>::new(db);
/// ```
#[derive(Clone, Debug)]
pub struct MongoStore<T> {
    database: Database,
    _marker: std::marker::PhantomData<T>,
}

impl<T> MongoStore<T> {
    /// Create a new `MongoStore` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: Entity> MongoStore<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    /// Report a driver failure with its message untouched.
    fn driver(operation: &str, err: impl std::fmt::Display) -> StorageError {
        let message = err.to_string();
        tracing::warn!(
            collection = T::resource_name(),
            operation,
            error = %message,
            "MongoDB operation failed"
        );
        StorageError::Driver { message }
    }

    fn serialization(message: impl Into<String>) -> EntityError {
        EntityError::SerializationError {
            entity_type: T::resource_name_singular().to_string(),
            message: message.into(),
        }
    }

    fn entity_to_document(entity: &T) -> Result<Document> {
        let json = serde_json::to_value(entity).map_err(|e| Self::serialization(e.to_string()))?;
        Ok(json_to_document(json).map_err(Self::serialization)?)
    }

    fn document_to_entity(doc: Document) -> Result<T> {
        let json = document_to_json(doc);
        Ok(serde_json::from_value(json).map_err(|e| Self::serialization(e.to_string()))?)
    }

    fn patch_to_update(patch: &T::Patch) -> Result<Document> {
        let mut set = Document::new();
        for (field, value) in patch.assignments() {
            let bson = mongodb::bson::to_bson(&value.to_json())
                .map_err(|e| Self::serialization(e.to_string()))?;
            set.insert(field, bson);
        }
        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl<T: Entity> DocumentStore<T> for MongoStore<T> {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>> {
        tracing::debug!(entity_type = T::resource_name_singular(), %id, "finding document");

        let doc = self
            .collection()
            .find_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| Self::driver("find", e))?;

        doc.map(Self::document_to_entity).transpose()
    }

    /// Natural order; an empty filter returns the whole collection.
    async fn find(&self, filter: &Filter) -> Result<Vec<T>> {
        let query = filter_to_document(filter).map_err(Self::serialization)?;

        tracing::debug!(
            entity_type = T::resource_name_singular(),
            filter = %query,
            "finding documents"
        );

        let cursor = self
            .collection()
            .find(query)
            .await
            .map_err(|e| Self::driver("find", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| Self::driver("collect", e))?;

        docs.into_iter().map(Self::document_to_entity).collect()
    }

    async fn save(&self, entity: T) -> Result<T> {
        let doc = Self::entity_to_document(&entity)?;

        tracing::debug!(
            entity_type = T::resource_name_singular(),
            id = %entity.id(),
            "inserting document"
        );

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| Self::driver("save", e))?;

        Ok(entity)
    }

    async fn find_by_id_and_update(&self, id: &Uuid, patch: &T::Patch) -> Result<Option<T>> {
        let update = Self::patch_to_update(patch)?;

        tracing::debug!(entity_type = T::resource_name_singular(), %id, "updating document");

        let doc = self
            .collection()
            .find_one_and_update(doc! { "_id": uuid_bson(id) }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| Self::driver("update", e))?;

        doc.map(Self::document_to_entity).transpose()
    }

    async fn find_by_id_and_remove(&self, id: &Uuid) -> Result<Option<T>> {
        tracing::debug!(entity_type = T::resource_name_singular(), %id, "removing document");

        let doc = self
            .collection()
            .find_one_and_delete(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| Self::driver("remove", e))?;

        doc.map(Self::document_to_entity).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;

    #[test]
    fn test_json_to_document_renames_id() {
        let id = Uuid::new_v4();
        let doc = json_to_document(serde_json::json!({ "id": id.to_string(), "name": "Jaws" }))
            .unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), id.to_string());
        assert!(doc.get("id").is_none());
    }

    #[test]
    fn test_document_to_json_renames_id() {
        let json = document_to_json(doc! { "_id": "abc", "age": 77 });
        assert_eq!(json["id"], "abc");
        assert_eq!(json["age"], 77);
    }

    #[test]
    fn test_driver_failure_keeps_message() {
        let err = MongoStore::<crate::entities::Movie>::driver(
            "find",
            "Kind: Server selection timeout, labels: {}",
        );

        assert!(matches!(err, StorageError::Driver { .. }));
        assert_eq!(err.to_string(), "Kind: Server selection timeout, labels: {}");
    }

    #[test]
    fn test_filter_to_document() {
        let director_id = Uuid::new_v4();
        let query = filter_to_document(&Filter::eq("directorId", director_id)).unwrap();
        assert_eq!(query.get_str("directorId").unwrap(), director_id.to_string());

        let query = filter_to_document(&Filter::eq("id", FieldValue::Null)).unwrap();
        assert_eq!(query.get("_id"), Some(&Bson::Null));

        assert!(filter_to_document(&Filter::all()).unwrap().is_empty());
    }
}
