use async_trait::async_trait;
use quarterseed_core::Collection;

use crate::error::StorageError;

/// Collection schema operations of the host.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Find a collection by name or id. Misses are `StorageError::NotFound`.
    async fn find_collection_by_name_or_id(&self, key: &str) -> Result<Collection, StorageError>;

    /// Create a collection, or replace the definition of one with the same id.
    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError>;

    /// Delete a collection and every record in it.
    async fn delete_collection(&self, collection: &Collection) -> Result<(), StorageError>;
}
