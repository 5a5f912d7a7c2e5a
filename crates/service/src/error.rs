//! Typed error enums for the service layer.
//!
//! `MigrationError` is what the migration runner reports; `ServiceError`
//! covers the counter and chart services.

use quarterseed_storage::StorageError;
use thiserror::Error;

/// Failure while applying or reverting a migration. Always fatal: the run
/// stops at the first one.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A collection create/delete or record save was rejected by the store.
    #[error("{step}: {source}")]
    Persistence {
        step: String,
        #[source]
        source: StorageError,
    },

    /// Raised by the runner, naming the migration that failed.
    #[error("migration {id} failed: {source}")]
    Failed {
        id: String,
        #[source]
        source: Box<MigrationError>,
    },
}

impl MigrationError {
    pub(crate) fn persistence(step: impl Into<String>, source: StorageError) -> Self {
        Self::Persistence { step: step.into(), source }
    }

    /// The underlying storage error, looking through runner wrapping.
    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            Self::Persistence { source, .. } => Some(source),
            Self::Failed { source, .. } => source.storage_error(),
        }
    }

    /// The step that failed, looking through runner wrapping.
    pub fn step(&self) -> Option<&str> {
        match self {
            Self::Persistence { step, .. } => Some(step),
            Self::Failed { source, .. } => source.step(),
        }
    }
}

/// Service-layer error for counter and chart operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Collections the service depends on have not been migrated.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Stored data does not have the expected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ServiceError {
    /// Whether the migrated collections are missing.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}
