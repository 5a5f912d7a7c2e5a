//! Host-side checks shared by every backend.
//!
//! Records are validated against their collection's fields, and unique
//! index statements are parsed so backends without a SQL engine can enforce
//! them.

use std::sync::LazyLock;

use quarterseed_core::{Collection, Record};
use regex::Regex;

use crate::error::StorageError;

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").unwrap());

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static UNIQUE_INDEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^\s*CREATE\s+UNIQUE\s+INDEX\s+(?:IF\s+NOT\s+EXISTS\s+)?[`"]?(\w+)[`"]?\s+ON\s+[`"]?(\w+)[`"]?\s*\(([^)]*)\)\s*;?\s*$"#,
    )
    .unwrap()
});

/// Field and collection names must be plain SQL identifiers.
pub fn validate_identifier(name: &str) -> Result<(), StorageError> {
    if IDENTIFIER_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(StorageError::InvalidIdentifier(name.to_owned()))
    }
}

/// Check a collection definition before it is stored.
pub fn validate_collection(collection: &Collection) -> Result<(), StorageError> {
    validate_identifier(&collection.name)?;
    for field in &collection.fields {
        validate_identifier(&field.name)?;
        if matches!(field.name.as_str(), "id" | "created" | "updated") {
            return Err(StorageError::Validation(format!(
                "{}: field name {} is reserved",
                collection.name, field.name
            )));
        }
    }
    for index in unique_indexes(collection)? {
        for column in &index.columns {
            if collection.field(column).is_none() && column != "id" {
                return Err(StorageError::Validation(format!(
                    "{}: index {} references unknown field {column}",
                    collection.name, index.name
                )));
            }
        }
    }
    Ok(())
}

/// Check a record's data against its collection's fields.
///
/// Unknown fields are rejected, as are values of the wrong type and missing
/// required values.
pub fn validate_record(collection: &Collection, record: &Record) -> Result<(), StorageError> {
    if record.id.is_empty() {
        return Err(StorageError::Validation(format!("{}: record id is empty", collection.name)));
    }
    if let Some(unknown) = record.data.keys().find(|key| collection.field(key).is_none()) {
        return Err(StorageError::Validation(format!(
            "{}: unknown field {unknown}",
            collection.name
        )));
    }
    for field in &collection.fields {
        if !field.is_satisfied_by(record.get(&field.name)) {
            return Err(StorageError::Validation(format!(
                "{}.{}: expected {}{}",
                collection.name,
                field.name,
                if field.required { "required " } else { "" },
                field.field_type
            )));
        }
    }
    Ok(())
}

/// A parsed `CREATE UNIQUE INDEX` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIndex {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
}

/// Unique indexes declared on a collection. Non-unique statements are skipped;
/// unique statements that cannot be parsed are an error.
pub fn unique_indexes(collection: &Collection) -> Result<Vec<UniqueIndex>, StorageError> {
    let mut indexes = Vec::new();
    for statement in &collection.indexes {
        if !statement.to_ascii_uppercase().contains("UNIQUE") {
            continue;
        }
        let caps = UNIQUE_INDEX_REGEX.captures(statement).ok_or_else(|| {
            StorageError::Validation(format!("unsupported index statement: {statement}"))
        })?;
        let table = caps[2].to_owned();
        if table != collection.name {
            return Err(StorageError::Validation(format!(
                "index {} targets {table}, not {}",
                &caps[1], collection.name
            )));
        }
        let columns = caps[3]
            .split(',')
            .map(|col| {
                let col = col.trim();
                let col = col.split_whitespace().next().unwrap_or(col);
                col.trim_matches(|c| c == '"' || c == '`').to_owned()
            })
            .filter(|col| !col.is_empty())
            .collect();
        indexes.push(UniqueIndex { name: caps[1].to_owned(), table, columns });
    }
    Ok(indexes)
}
