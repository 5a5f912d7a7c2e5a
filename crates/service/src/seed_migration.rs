//! Seed migration for `value_quarters` and `counters`.
//!
//! Forward drops and recreates both collections, then seeds one row per
//! quarter and the single counter row. Backward deletes whichever of the two
//! collections exist. Every step is awaited in order and the first failure
//! aborts the run; nothing already applied is rolled back.

use async_trait::async_trait;
use quarterseed_core::{
    COUNTERS_COLLECTION, Collection, Quarter, Record, SeedConfig, SeedValues,
    VALUE_QUARTERS_COLLECTION,
};
use quarterseed_storage::HostStore;
use serde::Serialize;

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::schema::{counters_collection, value_quarters_collection};

/// One `value_quarters` row as it will be written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeedRow {
    pub quarter: Quarter,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SeedMigration {
    config: SeedConfig,
}

impl SeedMigration {
    pub const ID: &'static str = "1700000000_seed_value_quarters_and_counters";

    #[must_use]
    pub const fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Rows the forward migration writes, in write order. One generator draw
    /// per quarter, chronologically.
    #[must_use]
    pub fn seed_rows(&self) -> Vec<SeedRow> {
        let values = SeedValues::new(self.config.seed, self.config.bounds);
        self.config
            .quarters
            .iter()
            .zip(values)
            .map(|(quarter, value)| SeedRow { quarter, value })
            .collect()
    }

    async fn recreate_value_quarters(&self, store: &dyn HostStore) -> Result<(), MigrationError> {
        delete_if_exists(store, VALUE_QUARTERS_COLLECTION).await?;

        let collection = value_quarters_collection();
        save_collection(store, &collection).await?;

        let rows = self.seed_rows();
        for row in &rows {
            let mut record = Record::new(&collection);
            record.set("quarter", row.quarter.to_string());
            record.set("value", row.value);
            store.save_record(&record).await.map_err(|source| {
                MigrationError::persistence(
                    format!("save record {}/{}", collection.name, row.quarter),
                    source,
                )
            })?;
        }
        tracing::info!(
            collection = %collection.name,
            records = rows.len(),
            seed = self.config.seed,
            "collection recreated and seeded"
        );
        Ok(())
    }

    async fn recreate_counters(&self, store: &dyn HostStore) -> Result<(), MigrationError> {
        delete_if_exists(store, COUNTERS_COLLECTION).await?;

        let variant = self.config.counter_variant;
        let collection = counters_collection(variant);
        save_collection(store, &collection).await?;

        let mut record = Record::new(&collection).with_id(variant.record_id());
        record.set("value", 0);
        store.save_record(&record).await.map_err(|source| {
            MigrationError::persistence(
                format!("save record {}/{}", collection.name, record.id),
                source,
            )
        })?;
        tracing::info!(
            collection = %collection.name,
            variant = %variant,
            record_id = %record.id,
            "collection recreated and seeded"
        );
        Ok(())
    }
}

async fn save_collection(
    store: &dyn HostStore,
    collection: &Collection,
) -> Result<(), MigrationError> {
    store.save_collection(collection).await.map_err(|source| {
        MigrationError::persistence(format!("create collection {}", collection.name), source)
    })
}

/// Delete the named collection if present. Returns whether one was deleted.
async fn delete_if_exists(store: &dyn HostStore, name: &str) -> Result<bool, MigrationError> {
    let existing = match store.find_collection_by_name_or_id(name).await {
        Ok(existing) => existing,
        Err(e) if e.is_not_found() => return Ok(false),
        Err(source) => {
            return Err(MigrationError::persistence(format!("look up collection {name}"), source));
        },
    };
    store.delete_collection(&existing).await.map_err(|source| {
        MigrationError::persistence(format!("delete collection {name}"), source)
    })?;
    tracing::info!(collection = %name, "existing collection deleted");
    Ok(true)
}

#[async_trait]
impl Migration for SeedMigration {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn up(&self, store: &dyn HostStore) -> Result<(), MigrationError> {
        self.recreate_value_quarters(store).await?;
        self.recreate_counters(store).await
    }

    async fn down(&self, store: &dyn HostStore) -> Result<(), MigrationError> {
        for name in [VALUE_QUARTERS_COLLECTION, COUNTERS_COLLECTION] {
            if !delete_if_exists(store, name).await? {
                tracing::debug!(collection = %name, "collection absent, nothing to delete");
            }
        }
        Ok(())
    }
}
