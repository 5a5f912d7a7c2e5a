//! Shared constants for quarterseed.
//!
//! Collection names, seed bounds and pool sizing live here so the migration,
//! the services and the storage backends agree on them.

/// Name of the collection holding one seeded value per fiscal quarter.
pub const VALUE_QUARTERS_COLLECTION: &str = "value_quarters";

/// Name of the single-row counter collection.
pub const COUNTERS_COLLECTION: &str = "counters";

/// Unique index guaranteeing one row per quarter.
pub const VALUE_QUARTERS_QUARTER_INDEX: &str =
    "CREATE UNIQUE INDEX idx_value_quarters_quarter ON value_quarters (quarter)";

/// Inclusive lower bound of seeded values.
pub const MIN_VALUE: f64 = 1.0;

/// Exclusive upper bound of seeded values.
pub const MAX_VALUE: f64 = 500_000_000_000.0;

/// Generator seed for reproducible seed values.
pub const DEFAULT_SEED: u64 = 42;

pub const START_YEAR: u16 = 1999;
pub const START_QUARTER: u8 = 1;
pub const END_YEAR: u16 = 2025;
pub const END_QUARTER: u8 = 4;

/// Length of host-assigned record and collection identifiers.
pub const ID_LENGTH: usize = 15;

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Hint returned when the migrated collections are absent.
pub const SETUP_HINT: &str = "collections are missing; run `quarterseed up` to apply migrations";
