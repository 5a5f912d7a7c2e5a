#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use quarterseed_core::{Record, SeedValues};
use quarterseed_storage::StorageBackend;
use quarterseed_storage::traits::{CollectionStore, RecordStore};

use crate::schema::value_quarters_collection;
use crate::{ChartService, Migration, SeedMigration};

#[tokio::test]
async fn series_covers_every_seeded_quarter() {
    let storage = Arc::new(StorageBackend::new_memory());
    SeedMigration::default().up(storage.as_ref()).await.unwrap();

    let series = ChartService::new(storage).series().await.unwrap();
    assert_eq!(series.len(), 108);
    assert_eq!(series.labels.first().map(String::as_str), Some("Q1 1999"));
    assert_eq!(series.labels.last().map(String::as_str), Some("Q4 2025"));

    let draws: Vec<f64> = SeedValues::default().take(108).collect();
    assert_eq!(series.values, draws);
}

#[tokio::test]
async fn series_sorts_by_quarter_not_insertion() {
    let storage = Arc::new(StorageBackend::new_memory());
    let collection = value_quarters_collection();
    storage.save_collection(&collection).await.unwrap();
    for (quarter, value) in [("2001Q1", 3.0), ("1999Q4", 1.0), ("2000Q2", 2.0)] {
        let mut record = Record::new(&collection);
        record.set("quarter", quarter);
        record.set("value", value);
        storage.save_record(&record).await.unwrap();
    }

    let series = ChartService::new(storage).series().await.unwrap();
    assert_eq!(series.labels, ["Q4 1999", "Q2 2000", "Q1 2001"]);
    assert_eq!(series.values, [1.0, 2.0, 3.0]);
}

#[tokio::test]
async fn empty_collection_gives_empty_series() {
    let storage = Arc::new(StorageBackend::new_memory());
    storage.save_collection(&value_quarters_collection()).await.unwrap();
    let series = ChartService::new(storage).series().await.unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn missing_collection_reports_setup_hint() {
    let storage = Arc::new(StorageBackend::new_memory());
    let err = ChartService::new(storage).series().await.unwrap_err();
    assert!(err.is_not_configured());
}
