//! RecordStore implementation for PgStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quarterseed_core::{Collection, FieldType, Record};
use serde_json::{Map, Value};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::{PgStore, quote_ident};
use crate::error::StorageError;
use crate::traits::RecordStore;
use crate::validation::validate_record;

fn upsert_sql(collection: &Collection) -> String {
    let fields: Vec<String> = collection.fields.iter().map(|f| quote_ident(&f.name)).collect();
    let placeholders: Vec<String> = (2..fields.len() + 2).map(|i| format!("${i}")).collect();
    let mut updates: Vec<String> =
        fields.iter().map(|f| format!("{f} = EXCLUDED.{f}")).collect();
    updates.push("updated = clock_timestamp()".to_owned());

    let mut columns = vec!["id".to_owned()];
    columns.extend(fields);
    format!(
        "INSERT INTO {} ({}) VALUES ($1{}{}) ON CONFLICT (id) DO UPDATE SET {}",
        quote_ident(&collection.name),
        columns.join(", "),
        if placeholders.is_empty() { "" } else { ", " },
        placeholders.join(", "),
        updates.join(", ")
    )
}

fn select_sql(collection: &Collection, filter: &str) -> String {
    format!(
        "SELECT to_jsonb(t) - 'id' - 'created' - 'updated' AS doc, id, created, updated
         FROM {} t {filter}",
        quote_ident(&collection.name)
    )
}

fn row_to_record(collection: &Collection, row: &PgRow) -> Result<Record, StorageError> {
    let doc: Value = row.try_get("doc")?;
    let created: DateTime<Utc> = row.try_get("created")?;
    let updated: DateTime<Utc> = row.try_get("updated")?;
    let data: Map<String, Value> = match doc {
        Value::Object(map) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        other => {
            return Err(StorageError::DataCorruption {
                context: format!("{}: row is not an object", collection.name),
                source: format!("unexpected row document {other}").into(),
            });
        },
    };
    Ok(Record {
        id: row.try_get("id")?,
        collection_name: collection.name.clone(),
        data,
        created: Some(created),
        updated: Some(updated),
    })
}

#[async_trait]
impl RecordStore for PgStore {
    async fn save_record(&self, record: &Record) -> Result<(), StorageError> {
        let collection = self.load_collection(&record.collection_name).await?;
        validate_record(&collection, record)?;

        let sql = upsert_sql(&collection);
        let mut query = sqlx::query(&sql).bind(&record.id);
        for field in &collection.fields {
            query = match field.field_type {
                FieldType::Text => query.bind(record.get_str(&field.name).map(str::to_owned)),
                FieldType::Number => query.bind(record.get_f64(&field.name)),
            };
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn find_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StorageError> {
        let collection = self.load_collection(collection).await?;
        let row = sqlx::query(&select_sql(&collection, "WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_record(&collection, &r)).transpose()
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        let collection = self.load_collection(collection).await?;
        let rows = sqlx::query(&select_sql(&collection, "ORDER BY created, id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|r| row_to_record(&collection, r)).collect()
    }
}
