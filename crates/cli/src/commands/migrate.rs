//! Apply or revert the registered migrations.

use anyhow::Result;
use quarterseed_core::SeedConfig;
use quarterseed_service::{MigrationRunner, migrations};

use crate::open_storage;

pub(crate) async fn up(database_url: Option<&str>, config: &SeedConfig) -> Result<()> {
    let storage = open_storage(database_url).await?;
    let runner = MigrationRunner::new(&storage, migrations(config));
    let applied = runner.up().await?;
    println!("applied {applied} migration(s): {}", runner.ids().join(", "));
    Ok(())
}

pub(crate) async fn down(database_url: Option<&str>, config: &SeedConfig) -> Result<()> {
    let storage = open_storage(database_url).await?;
    let runner = MigrationRunner::new(&storage, migrations(config));
    let reverted = runner.down().await?;
    println!("reverted {reverted} migration(s): {}", runner.ids().join(", "));
    Ok(())
}
