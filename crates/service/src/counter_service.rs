use std::sync::Arc;

use quarterseed_core::{COUNTERS_COLLECTION, CounterVariant, Record, SETUP_HINT};
use quarterseed_storage::StorageBackend;
use quarterseed_storage::traits::{CollectionStore, RecordStore};

use crate::ServiceError;

/// Reads and steps the single counter row.
///
/// Updates are read-modify-write without locking; concurrent callers can
/// lose increments.
pub struct CounterService {
    storage: Arc<StorageBackend>,
    variant: CounterVariant,
}

impl CounterService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, variant: CounterVariant) -> Self {
        Self { storage, variant }
    }

    /// The counter row, created with value 0 if the collection exists but the
    /// row does not.
    async fn get_or_create(&self) -> Result<Record, ServiceError> {
        let collection = match self.storage.find_collection_by_name_or_id(COUNTERS_COLLECTION).await
        {
            Ok(collection) => collection,
            Err(e) if e.is_not_found() => {
                return Err(ServiceError::NotConfigured(SETUP_HINT.to_owned()));
            },
            Err(e) => return Err(e.into()),
        };

        let id = self.variant.record_id();
        if let Some(record) = self.storage.find_record(&collection.name, id).await? {
            return Ok(record);
        }

        tracing::info!(record_id = id, "counter row missing, creating it");
        let mut record = Record::new(&collection).with_id(id);
        record.set("value", 0);
        self.storage.save_record(&record).await?;
        Ok(record)
    }

    pub async fn get_value(&self) -> Result<f64, ServiceError> {
        let record = self.get_or_create().await?;
        Ok(record.get_f64("value").unwrap_or(0.0))
    }

    pub async fn increment(&self) -> Result<f64, ServiceError> {
        self.step(1.0).await
    }

    pub async fn decrement(&self) -> Result<f64, ServiceError> {
        self.step(-1.0).await
    }

    async fn step(&self, delta: f64) -> Result<f64, ServiceError> {
        let mut record = self.get_or_create().await?;
        let value = record.get_f64("value").unwrap_or(0.0) + delta;
        record.set("value", value);
        self.storage.save_record(&record).await?;
        tracing::debug!(record_id = %record.id, value, "counter updated");
        Ok(value)
    }
}
