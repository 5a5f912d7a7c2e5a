//! CollectionStore implementation for PgStore.

use async_trait::async_trait;
use quarterseed_core::Collection;
use sqlx::types::Json;

use super::{COLLECTION_COLUMNS, PgStore, column_type, quote_ident, row_to_collection};
use crate::error::StorageError;
use crate::traits::CollectionStore;
use crate::validation::validate_collection;

impl PgStore {
    pub(crate) async fn load_collection(&self, key: &str) -> Result<Collection, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM _collections WHERE name = $1 OR id = $1"
        ))
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_collection(&row),
            None => Err(StorageError::not_found("collection", key)),
        }
    }
}

fn create_table_sql(collection: &Collection) -> String {
    let mut columns = vec!["id TEXT PRIMARY KEY".to_owned()];
    for field in &collection.fields {
        let not_null = if field.required { " NOT NULL" } else { "" };
        columns.push(format!("{} {}{not_null}", quote_ident(&field.name), column_type(field)));
    }
    columns.push("created TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()".to_owned());
    columns.push("updated TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()".to_owned());
    format!("CREATE TABLE {} ({})", quote_ident(&collection.name), columns.join(", "))
}

#[async_trait]
impl CollectionStore for PgStore {
    async fn find_collection_by_name_or_id(&self, key: &str) -> Result<Collection, StorageError> {
        self.load_collection(key).await
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        validate_collection(collection)?;

        let existing = match self.load_collection(&collection.id).await {
            Ok(existing) => Some(existing),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        let mut tx = self.pool.begin().await?;
        match existing {
            Some(existing) => {
                if existing.name != collection.name
                    || existing.fields != collection.fields
                    || existing.indexes != collection.indexes
                {
                    return Err(StorageError::Validation(format!(
                        "{}: changing name, fields or indexes of an existing collection is not supported",
                        existing.name
                    )));
                }
                sqlx::query(
                    "UPDATE _collections SET list_rule = $2, view_rule = $3, create_rule = $4,
                     update_rule = $5, delete_rule = $6, updated = NOW() WHERE id = $1",
                )
                .bind(&collection.id)
                .bind(&collection.rules.list)
                .bind(&collection.rules.view)
                .bind(&collection.rules.create)
                .bind(&collection.rules.update)
                .bind(&collection.rules.delete)
                .execute(&mut *tx)
                .await?;
            },
            None => {
                sqlx::query(&format!(
                    "INSERT INTO _collections ({COLLECTION_COLUMNS})
                     VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)"
                ))
                .bind(&collection.id)
                .bind(&collection.name)
                .bind(collection.kind.to_string())
                .bind(Json(&collection.fields))
                .bind(&collection.rules.list)
                .bind(&collection.rules.view)
                .bind(&collection.rules.create)
                .bind(&collection.rules.update)
                .bind(&collection.rules.delete)
                .bind(Json(&collection.indexes))
                .execute(&mut *tx)
                .await?;

                sqlx::query(&create_table_sql(collection)).execute(&mut *tx).await?;
                for statement in &collection.indexes {
                    sqlx::query(statement).execute(&mut *tx).await?;
                }
            },
        }
        tx.commit().await?;
        tracing::debug!(collection = %collection.name, id = %collection.id, "collection saved");
        Ok(())
    }

    async fn delete_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        let name: Option<String> =
            sqlx::query_scalar("DELETE FROM _collections WHERE id = $1 RETURNING name")
                .bind(&collection.id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(name) = name else {
            return Err(StorageError::not_found("collection", collection.id.clone()));
        };
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", quote_ident(&name)))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::debug!(collection = %name, "collection deleted");
        Ok(())
    }
}
