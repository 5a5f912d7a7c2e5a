use std::sync::Arc;

use anyhow::Result;
use quarterseed_core::CounterVariant;
use quarterseed_service::CounterService;

use crate::{CounterAction, open_storage};

pub(crate) async fn run(
    database_url: Option<&str>,
    variant: CounterVariant,
    action: CounterAction,
) -> Result<()> {
    let storage = Arc::new(open_storage(database_url).await?);
    let service = CounterService::new(storage, variant);
    let value = match action {
        CounterAction::Get => service.get_value().await?,
        CounterAction::Increment => service.increment().await?,
        CounterAction::Decrement => service.decrement().await?,
    };
    println!("{value}");
    Ok(())
}
