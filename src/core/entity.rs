//! Entity traits defining the core abstraction for stored records

use crate::core::field::FieldValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Base trait for every record kept in a document store.
///
/// An entity has:
/// - a server-assigned identifier
/// - a collection name (e.g., "movies", "directors")
/// - dynamic field access used by equality filters
///
/// Cross references between entities are plain identifiers resolved by
/// lookup, never nested objects.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The `$set`-style partial update accepted by this entity
    type Patch: EntityPatch<Self>;

    /// The plural collection name (e.g., "movies")
    fn resource_name() -> &'static str;

    /// The singular name used in logs and errors (e.g., "movie")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the value of a stored field by its wire name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// A partial update: the fields to overwrite on an existing record.
///
/// Fields absent from the patch keep their stored value. A field present
/// with `FieldValue::Null` is cleared.
pub trait EntityPatch<T>: Clone + Send + Sync + 'static {
    /// Apply the patch in place
    fn apply(&self, target: &mut T);

    /// The `(field, value)` pairs written by this patch, by wire name
    fn assignments(&self) -> Vec<(&'static str, FieldValue)>;
}
