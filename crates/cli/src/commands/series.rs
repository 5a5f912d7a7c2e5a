use std::sync::Arc;

use anyhow::Result;
use quarterseed_service::ChartService;

use crate::open_storage;

pub(crate) async fn run(database_url: Option<&str>) -> Result<()> {
    let storage = Arc::new(open_storage(database_url).await?);
    let series = ChartService::new(storage).series().await?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}
