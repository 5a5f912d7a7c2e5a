//! Storage backend trait abstraction
//!
//! The host capability set the migration and services consume: collection
//! lookup/create/delete and record persistence.

pub mod collection;
pub mod record;

pub use collection::CollectionStore;
pub use record::RecordStore;

/// Both halves of the host capability set.
pub trait HostStore: CollectionStore + RecordStore {}

impl<T: CollectionStore + RecordStore> HostStore for T {}
