//! Service trait for document store operations

use crate::core::entity::Entity;
use crate::core::field::Filter;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Document store for a single entity collection
///
/// The resolvers treat every operation as an opaque asynchronous call that
/// returns the matching record(s) or `None`. Durability and atomicity belong
/// entirely to the implementation.
#[async_trait]
pub trait DocumentStore<T: Entity>: Send + Sync {
    /// Fetch a record by identifier
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>>;

    /// Fetch every record matching the filter, in collection order
    async fn find(&self, filter: &Filter) -> Result<Vec<T>>;

    /// Persist a new record and return the stored value
    async fn save(&self, entity: T) -> Result<T>;

    /// Apply a partial update and return the post-update record
    ///
    /// Returns `Ok(None)` when no record has this identifier.
    async fn find_by_id_and_update(&self, id: &Uuid, patch: &T::Patch) -> Result<Option<T>>;

    /// Remove a record and return its prior value
    ///
    /// Returns `Ok(None)` when no record has this identifier.
    async fn find_by_id_and_remove(&self, id: &Uuid) -> Result<Option<T>>;
}
