//! In-memory host implementation.
//!
//! Keeps collections and their records behind a single async mutex and
//! enforces the same schema and unique-index rules as the PostgreSQL host.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use quarterseed_core::{Collection, Record};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::traits::{CollectionStore, RecordStore};
use crate::validation::{UniqueIndex, unique_indexes, validate_collection, validate_record};

#[derive(Debug)]
struct StoredCollection {
    collection: Collection,
    unique: Vec<UniqueIndex>,
    /// Records in creation order.
    records: Vec<Record>,
}

impl StoredCollection {
    fn check_unique(&self, record: &Record) -> Result<(), StorageError> {
        for index in &self.unique {
            let key: Vec<Option<&Value>> = index.columns.iter().map(|c| record.get(c)).collect();
            // NULLs never collide, as in SQL.
            if key.iter().any(|v| v.is_none_or(Value::is_null)) {
                continue;
            }
            let clash = self.records.iter().any(|existing| {
                existing.id != record.id
                    && index.columns.iter().zip(&key).all(|(c, v)| existing.get(c) == *v)
            });
            if clash {
                return Err(StorageError::Duplicate(format!(
                    "{}: {} already has a record with the same {}",
                    self.collection.name,
                    index.name,
                    index.columns.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Host backed by process memory. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Vec<StoredCollection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all collections, in creation order.
    pub async fn collection_names(&self) -> Vec<String> {
        self.collections.lock().await.iter().map(|c| c.collection.name.clone()).collect()
    }

    /// Number of records per collection name.
    pub async fn record_counts(&self) -> HashMap<String, usize> {
        self.collections
            .lock()
            .await
            .iter()
            .map(|c| (c.collection.name.clone(), c.records.len()))
            .collect()
    }
}

fn position(collections: &[StoredCollection], key: &str) -> Option<usize> {
    collections.iter().position(|c| c.collection.matches(key))
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn find_collection_by_name_or_id(&self, key: &str) -> Result<Collection, StorageError> {
        let collections = self.collections.lock().await;
        position(&collections, key)
            .map(|i| collections[i].collection.clone())
            .ok_or_else(|| StorageError::not_found("collection", key))
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        validate_collection(collection)?;
        let unique = unique_indexes(collection)?;
        let mut collections = self.collections.lock().await;

        if collections
            .iter()
            .any(|c| c.collection.name == collection.name && c.collection.id != collection.id)
        {
            return Err(StorageError::Duplicate(format!(
                "collection name {} is already taken",
                collection.name
            )));
        }

        match collections.iter_mut().find(|c| c.collection.id == collection.id) {
            Some(existing) => {
                if let Some(bad) = existing
                    .records
                    .iter()
                    .find_map(|r| validate_record(collection, r).err())
                {
                    return Err(bad);
                }
                existing.collection = collection.clone();
                existing.unique = unique;
                for record in &mut existing.records {
                    record.collection_name.clone_from(&collection.name);
                }
            },
            None => collections.push(StoredCollection {
                collection: collection.clone(),
                unique,
                records: Vec::new(),
            }),
        }
        tracing::debug!(collection = %collection.name, id = %collection.id, "collection saved");
        Ok(())
    }

    async fn delete_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        let mut collections = self.collections.lock().await;
        let index = position(&collections, &collection.id)
            .ok_or_else(|| StorageError::not_found("collection", collection.id.clone()))?;
        let removed = collections.remove(index);
        tracing::debug!(
            collection = %removed.collection.name,
            records = removed.records.len(),
            "collection deleted"
        );
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn save_record(&self, record: &Record) -> Result<(), StorageError> {
        let mut collections = self.collections.lock().await;
        let index = position(&collections, &record.collection_name)
            .ok_or_else(|| StorageError::not_found("collection", record.collection_name.clone()))?;
        let stored = &mut collections[index];
        validate_record(&stored.collection, record)?;
        stored.check_unique(record)?;

        let now = Utc::now();
        let mut saved = record.clone();
        saved.collection_name.clone_from(&stored.collection.name);
        saved.updated = Some(now);
        match stored.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                saved.created = existing.created;
                *existing = saved;
            },
            None => {
                saved.created = Some(now);
                stored.records.push(saved);
            },
        }
        Ok(())
    }

    async fn find_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StorageError> {
        let collections = self.collections.lock().await;
        let index = position(&collections, collection)
            .ok_or_else(|| StorageError::not_found("collection", collection))?;
        Ok(collections[index].records.iter().find(|r| r.id == id).cloned())
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        let collections = self.collections.lock().await;
        let index = position(&collections, collection)
            .ok_or_else(|| StorageError::not_found("collection", collection))?;
        Ok(collections[index].records.clone())
    }
}
