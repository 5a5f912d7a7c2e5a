//! Storage layer for quarterseed
//!
//! The host capability set (collection and record persistence) plus two
//! hosts: an in-memory one and a PostgreSQL one behind the `postgres` feature.

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
pub mod validation;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use pg_storage::{ENV_PG_MAX_CONNECTIONS, PgStore};
pub use traits::{CollectionStore, HostStore, RecordStore};
