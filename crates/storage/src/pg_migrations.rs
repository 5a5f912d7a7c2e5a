//! PostgreSQL bootstrap for the collection metadata table.

use sqlx::PgPool;

/// Create the `_collections` metadata table if it does not exist.
///
/// Every collection saved through `PgStore` gets one row here plus a table
/// of its own named after the collection.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _collections (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'base',
            fields JSONB NOT NULL DEFAULT '[]',
            list_rule TEXT,
            view_rule TEXT,
            create_rule TEXT,
            update_rule TEXT,
            delete_rule TEXT,
            indexes JSONB NOT NULL DEFAULT '[]',
            created TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_collections_name ON _collections (name)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL collection metadata ready");
    Ok(())
}
