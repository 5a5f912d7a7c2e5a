#![allow(clippy::unwrap_used, reason = "test code")]

use super::{create_quarter_record, create_value_quarters};
use crate::traits::{CollectionStore, RecordStore};
use crate::{MemoryStore, StorageError};
use quarterseed_core::{Collection, Record, SchemaField};
use serde_json::json;

#[tokio::test]
async fn find_collection_by_name_or_id() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();

    let by_name = store.find_collection_by_name_or_id("value_quarters").await.unwrap();
    let by_id = store.find_collection_by_name_or_id(&collection.id).await.unwrap();
    assert_eq!(by_name, collection);
    assert_eq!(by_id, collection);
}

#[tokio::test]
async fn missing_collection_is_not_found() {
    let store = MemoryStore::new();
    let err = store.find_collection_by_name_or_id("counters").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn collection_names_are_unique() {
    let store = MemoryStore::new();
    store.save_collection(&create_value_quarters()).await.unwrap();
    let err = store.save_collection(&create_value_quarters()).await.unwrap_err();
    assert!(err.is_duplicate());
}

#[tokio::test]
async fn delete_collection_cascades_to_records() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();
    store.save_record(&create_quarter_record(&collection, "1999Q1", 5.0)).await.unwrap();

    store.delete_collection(&collection).await.unwrap();
    assert!(store.collection_names().await.is_empty());
    let err = store.list_records("value_quarters").await.unwrap_err();
    assert!(err.is_not_found());

    // Recreating under the same name starts empty.
    let recreated = create_value_quarters();
    store.save_collection(&recreated).await.unwrap();
    assert!(store.list_records("value_quarters").await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_unknown_collection_fails() {
    let store = MemoryStore::new();
    let err = store.delete_collection(&create_value_quarters()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "collection", .. }));
}

#[tokio::test]
async fn unique_index_rejects_duplicate_quarter() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();
    store.save_record(&create_quarter_record(&collection, "1999Q1", 1.0)).await.unwrap();

    let err =
        store.save_record(&create_quarter_record(&collection, "1999Q1", 2.0)).await.unwrap_err();
    assert!(err.is_duplicate(), "got {err}");
    assert_eq!(store.list_records("value_quarters").await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_record_with_same_id_replaces() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();

    let mut record = create_quarter_record(&collection, "2000Q2", 1.0);
    store.save_record(&record).await.unwrap();
    let first = store.find_record("value_quarters", &record.id).await.unwrap().unwrap();

    record.set("value", 3.0);
    store.save_record(&record).await.unwrap();
    let second = store.find_record("value_quarters", &record.id).await.unwrap().unwrap();

    assert_eq!(second.get_f64("value"), Some(3.0));
    assert_eq!(second.created, first.created);
    assert!(second.updated >= first.updated);
    assert_eq!(store.list_records("value_quarters").await.unwrap().len(), 1);
}

#[tokio::test]
async fn schema_violations_are_rejected() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();

    let mut missing_value = Record::new(&collection);
    missing_value.set("quarter", "1999Q1");
    let err = store.save_record(&missing_value).await.unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));

    let mut wrong_type = create_quarter_record(&collection, "1999Q1", 1.0);
    wrong_type.set("value", json!("lots"));
    let err = store.save_record(&wrong_type).await.unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
}

#[tokio::test]
async fn records_list_in_creation_order() {
    let store = MemoryStore::new();
    let collection = create_value_quarters();
    store.save_collection(&collection).await.unwrap();
    for quarter in ["2001Q3", "1999Q1", "2000Q4"] {
        store.save_record(&create_quarter_record(&collection, quarter, 1.0)).await.unwrap();
    }
    let quarters: Vec<String> = store
        .list_records("value_quarters")
        .await
        .unwrap()
        .iter()
        .map(|r| r.get_str("quarter").unwrap().to_owned())
        .collect();
    assert_eq!(quarters, ["2001Q3", "1999Q1", "2000Q4"]);
}

#[tokio::test]
async fn find_record_miss_is_none() {
    let store = MemoryStore::new();
    let counters = Collection::new("counters").with_field(SchemaField::number("value", false));
    store.save_collection(&counters).await.unwrap();
    assert!(store.find_record("counters", "main").await.unwrap().is_none());
}

#[tokio::test]
async fn optional_field_may_be_absent() {
    let store = MemoryStore::new();
    let counters = Collection::new("counters").with_field(SchemaField::number("value", false));
    store.save_collection(&counters).await.unwrap();
    store.save_record(&Record::new(&counters).with_id("main")).await.unwrap();
    let record = store.find_record("counters", "main").await.unwrap().unwrap();
    assert_eq!(record.get_f64("value"), None);
    assert_eq!(store.record_counts().await.get("counters"), Some(&1));
}
