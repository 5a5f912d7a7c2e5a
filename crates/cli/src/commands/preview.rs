use anyhow::Result;
use quarterseed_core::SeedConfig;
use quarterseed_service::SeedMigration;

pub(crate) fn run(config: &SeedConfig, limit: Option<usize>) -> Result<()> {
    let mut rows = SeedMigration::new(config.clone()).seed_rows();
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
