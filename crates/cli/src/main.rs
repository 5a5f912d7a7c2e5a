use anyhow::Result;
use clap::{Parser, Subcommand};
use quarterseed_core::{CounterVariant, SeedConfig};
use quarterseed_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

/// `--database-url` value selecting the throwaway in-memory host.
const MEMORY_URL: &str = "memory://";

#[derive(Parser)]
#[command(name = "quarterseed")]
#[command(about = "Schema and seed migration for the value_quarters and counters collections", long_about = None)]
struct Cli {
    /// PostgreSQL connection string, or `memory://` for a throwaway in-memory host
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Counters definition to create: `main` or `public-create`
    /// (falls back to QUARTERSEED_COUNTER_VARIANT, then `main`)
    #[arg(long, global = true)]
    counter_variant: Option<CounterVariant>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop and recreate the collections, then seed them
    Up,
    /// Delete the collections if present
    Down,
    /// Print the seed rows without touching a database
    Preview {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the quarterly chart series
    Series,
    /// Read or step the counter
    Counter {
        #[command(subcommand)]
        action: CounterAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub(crate) enum CounterAction {
    Get,
    Increment,
    Decrement,
}

pub(crate) async fn open_storage(database_url: Option<&str>) -> Result<StorageBackend> {
    let url = database_url.ok_or_else(|| {
        anyhow::anyhow!("DATABASE_URL or --database-url must be set for this command")
    })?;
    let storage = if url == MEMORY_URL {
        StorageBackend::new_memory()
    } else {
        StorageBackend::new_postgres(url).await?
    };
    tracing::info!(backend = storage.kind(), "storage opened");
    Ok(storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SeedConfig::from_env_with(cli.counter_variant);
    let database_url = cli.database_url.as_deref();

    match cli.command {
        Commands::Up => commands::migrate::up(database_url, &config).await?,
        Commands::Down => commands::migrate::down(database_url, &config).await?,
        Commands::Preview { limit } => commands::preview::run(&config, limit)?,
        Commands::Series => commands::series::run(database_url).await?,
        Commands::Counter { action } => {
            commands::counter::run(database_url, config.counter_variant, action).await?;
        },
    }

    Ok(())
}
