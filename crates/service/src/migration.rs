//! Explicit migration registry and runner.
//!
//! Migrations are listed in `migrations()` and handed to a `MigrationRunner`
//! at startup; nothing registers itself at load time. There is no
//! applied-migration bookkeeping: `up` runs every entry, in order.

use async_trait::async_trait;
use quarterseed_core::SeedConfig;
use quarterseed_storage::HostStore;

use crate::error::MigrationError;
use crate::seed_migration::SeedMigration;

/// A forward/backward pair applied by the runner.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Stable identifier, used in logs and errors.
    fn id(&self) -> &str;

    async fn up(&self, store: &dyn HostStore) -> Result<(), MigrationError>;

    async fn down(&self, store: &dyn HostStore) -> Result<(), MigrationError>;
}

/// Every migration, in application order.
#[must_use]
pub fn migrations(config: &SeedConfig) -> Vec<Box<dyn Migration>> {
    vec![Box::new(SeedMigration::new(config.clone()))]
}

pub struct MigrationRunner<'a> {
    store: &'a dyn HostStore,
    migrations: Vec<Box<dyn Migration>>,
}

impl<'a> MigrationRunner<'a> {
    #[must_use]
    pub fn new(store: &'a dyn HostStore, migrations: Vec<Box<dyn Migration>>) -> Self {
        Self { store, migrations }
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.migrations.iter().map(|m| m.id()).collect()
    }

    /// Apply every migration in order, stopping at the first failure.
    /// Returns the number applied.
    pub async fn up(&self) -> Result<usize, MigrationError> {
        for migration in &self.migrations {
            tracing::info!(id = migration.id(), "applying migration");
            migration.up(self.store).await.map_err(|e| fail(migration.as_ref(), e))?;
        }
        tracing::info!(count = self.migrations.len(), "migrations applied");
        Ok(self.migrations.len())
    }

    /// Revert every migration in reverse order, stopping at the first failure.
    /// Returns the number reverted.
    pub async fn down(&self) -> Result<usize, MigrationError> {
        for migration in self.migrations.iter().rev() {
            tracing::info!(id = migration.id(), "reverting migration");
            migration.down(self.store).await.map_err(|e| fail(migration.as_ref(), e))?;
        }
        tracing::info!(count = self.migrations.len(), "migrations reverted");
        Ok(self.migrations.len())
    }
}

fn fail(migration: &dyn Migration, err: MigrationError) -> MigrationError {
    tracing::error!(id = migration.id(), error = %err, "migration failed");
    MigrationError::Failed { id: migration.id().to_owned(), source: Box::new(err) }
}
