//! Service layer for quarterseed
//!
//! The seed migration and its runner, plus the counter and chart services
//! that read the seeded collections.

mod chart_service;
mod counter_service;
mod error;
mod migration;
pub mod schema;
mod seed_migration;
#[cfg(test)]
mod tests;

pub use chart_service::{ChartService, QuarterSeries};
pub use counter_service::CounterService;
pub use error::{MigrationError, ServiceError};
pub use migration::{Migration, MigrationRunner, migrations};
pub use seed_migration::{SeedMigration, SeedRow};
