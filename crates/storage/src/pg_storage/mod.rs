//! PostgreSQL host backend using sqlx.
//!
//! Collection definitions live in `_collections`; each collection is
//! materialized as a table of the same name with `id`, one column per field,
//! and `created`/`updated` timestamps.

mod collections;
mod records;

use std::time::Duration;

use quarterseed_core::{
    AccessRules, Collection, FieldType, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    SchemaField, env_config::env_parse_with_default,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;
use crate::error::StorageError;

pub const ENV_PG_MAX_CONNECTIONS: &str = "QUARTERSEED_PG_MAX_CONNECTIONS";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_with_default(ENV_PG_MAX_CONNECTIONS, PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, bootstrapping the metadata table.
    pub async fn from_pool(pool: PgPool) -> Result<Self, StorageError> {
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStore initialized");
        Ok(Self { pool })
    }
}

pub(crate) const COLLECTION_COLUMNS: &str = "id, name, type, fields, list_rule, view_rule, create_rule, update_rule, delete_rule, indexes";

/// Double-quote an identifier that already passed `validate_identifier`.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{name}\"")
}

pub(crate) fn column_type(field: &SchemaField) -> &'static str {
    match field.field_type {
        FieldType::Text => "TEXT",
        FieldType::Number => "DOUBLE PRECISION",
    }
}

pub(crate) fn row_to_collection(row: &PgRow) -> Result<Collection, StorageError> {
    let kind: String = row.try_get("type")?;
    let fields: serde_json::Value = row.try_get("fields")?;
    let indexes: serde_json::Value = row.try_get("indexes")?;
    Ok(Collection {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        kind: kind.parse().map_err(|e| StorageError::DataCorruption {
            context: format!("collection type {kind}"),
            source: Box::new(e),
        })?,
        fields: serde_json::from_value(fields)?,
        rules: AccessRules {
            list: row.try_get("list_rule")?,
            view: row.try_get("view_rule")?,
            create: row.try_get("create_rule")?,
            update: row.try_get("update_rule")?,
            delete: row.try_get("delete_rule")?,
        },
        indexes: serde_json::from_value(indexes)?,
    })
}
