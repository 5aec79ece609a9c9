//! In-memory implementation of DocumentStore for testing and development

use crate::core::{DocumentStore, Entity, EntityPatch, Filter, StorageError};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory document store
///
/// Keeps records in insertion order. Clones share the same collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T> InMemoryStore<T> {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryStore<T> {
    fn poisoned() -> StorageError {
        StorageError::LockPoisoned {
            collection: T::resource_name().to_string(),
        }
    }
}

#[async_trait]
impl<T: Entity> DocumentStore<T> for InMemoryStore<T> {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>> {
        tracing::debug!(entity_type = T::resource_name_singular(), %id, "finding record");
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        Ok(records.get(id).cloned())
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<T>> {
        tracing::debug!(
            entity_type = T::resource_name_singular(),
            filter = ?filter.conditions(),
            "finding records"
        );
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        Ok(records
            .values()
            .filter(|record| filter.matches(|field| record.field_value(field)))
            .cloned()
            .collect())
    }

    async fn save(&self, entity: T) -> Result<T> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        tracing::debug!(
            entity_type = T::resource_name_singular(),
            id = %entity.id(),
            "saving record"
        );
        records.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn find_by_id_and_update(&self, id: &Uuid, patch: &T::Patch) -> Result<Option<T>> {
        tracing::debug!(entity_type = T::resource_name_singular(), %id, "updating record");
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        let Some(record) = records.get_mut(id) else {
            return Ok(None);
        };
        patch.apply(record);

        Ok(Some(record.clone()))
    }

    async fn find_by_id_and_remove(&self, id: &Uuid) -> Result<Option<T>> {
        tracing::debug!(entity_type = T::resource_name_singular(), %id, "removing record");
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        // shift_remove keeps the remaining records in insertion order
        Ok(records.shift_remove(id))
    }
}
