//! Test utilities and module declarations for service tests.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quarterseed_core::{Collection, Record};
use quarterseed_storage::traits::{CollectionStore, RecordStore};
use quarterseed_storage::{MemoryStore, StorageError};

/// Memory store that starts failing after a number of successful calls to
/// one kind of operation.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_record_saves_after: Option<usize>,
    pub fail_collection_deletes: bool,
    pub fail_lookups: bool,
    record_saves: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_record_saves_after(successes: usize) -> Self {
        Self { fail_record_saves_after: Some(successes), ..Self::default() }
    }

    pub fn failing_collection_deletes() -> Self {
        Self { fail_collection_deletes: true, ..Self::default() }
    }

    pub fn failing_lookups() -> Self {
        Self { fail_lookups: true, ..Self::default() }
    }

    pub fn record_saves(&self) -> usize {
        self.record_saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionStore for FlakyStore {
    async fn find_collection_by_name_or_id(&self, key: &str) -> Result<Collection, StorageError> {
        if self.fail_lookups {
            return Err(StorageError::Migration("lookup unavailable".to_owned()));
        }
        self.inner.find_collection_by_name_or_id(key).await
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        self.inner.save_collection(collection).await
    }

    async fn delete_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        if self.fail_collection_deletes {
            return Err(StorageError::Migration("delete refused".to_owned()));
        }
        self.inner.delete_collection(collection).await
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn save_record(&self, record: &Record) -> Result<(), StorageError> {
        let attempt = self.record_saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_record_saves_after.is_some_and(|limit| attempt >= limit) {
            return Err(StorageError::Validation("injected save failure".to_owned()));
        }
        self.inner.save_record(record).await
    }

    async fn find_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StorageError> {
        self.inner.find_record(collection, id).await
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        self.inner.list_records(collection).await
    }
}

mod chart_tests;
