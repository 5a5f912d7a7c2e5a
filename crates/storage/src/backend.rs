//! Unified storage backend with enum dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use quarterseed_core::{Collection, Record};

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::traits::{CollectionStore, RecordStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <MemoryStore as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStore as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(Arc<MemoryStore>),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStore),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStore::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── CollectionStore ──────────────────────────────────────────────

#[async_trait]
impl CollectionStore for StorageBackend {
    async fn find_collection_by_name_or_id(&self, key: &str) -> Result<Collection, StorageError> {
        dispatch!(self, CollectionStore, find_collection_by_name_or_id(key))
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        dispatch!(self, CollectionStore, save_collection(collection))
    }

    async fn delete_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        dispatch!(self, CollectionStore, delete_collection(collection))
    }
}

// ── RecordStore ──────────────────────────────────────────────────

#[async_trait]
impl RecordStore for StorageBackend {
    async fn save_record(&self, record: &Record) -> Result<(), StorageError> {
        dispatch!(self, RecordStore, save_record(record))
    }

    async fn find_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StorageError> {
        dispatch!(self, RecordStore, find_record(collection, id))
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        dispatch!(self, RecordStore, list_records(collection))
    }
}
