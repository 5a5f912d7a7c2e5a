use async_trait::async_trait;
use quarterseed_core::Record;

use crate::error::StorageError;

/// Record persistence, validated against the owning collection's schema.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert the record, or replace the one with the same id.
    async fn save_record(&self, record: &Record) -> Result<(), StorageError>;

    /// Get a record by id. `Ok(None)` when the collection exists but the record does not.
    async fn find_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StorageError>;

    /// All records of a collection in creation order.
    async fn list_records(&self, collection: &str) -> Result<Vec<Record>, StorageError>;
}
