use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::{Collection, generate_id};

/// A single row of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub collection_name: String,
    pub data: Map<String, Value>,
    /// Set by the store on first save.
    pub created: Option<DateTime<Utc>>,
    /// Set by the store on every save.
    pub updated: Option<DateTime<Utc>>,
}

impl Record {
    /// Empty record for `collection` with a generated id.
    #[must_use]
    pub fn new(collection: &Collection) -> Self {
        Self {
            id: generate_id(),
            collection_name: collection.name.clone(),
            data: Map::new(),
            created: None,
            updated: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.data.get(field).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_fields() {
        let collection = Collection::new("value_quarters");
        let mut record = Record::new(&collection);
        record.set("quarter", "1999Q1");
        record.set("value", 12.5);

        assert_eq!(record.collection_name, "value_quarters");
        assert_eq!(record.get_str("quarter"), Some("1999Q1"));
        assert_eq!(record.get_f64("value"), Some(12.5));
        assert_eq!(record.get_f64("quarter"), None);
        assert!(record.created.is_none());
    }

    #[test]
    fn with_id_overrides_generated_id() {
        let record = Record::new(&Collection::new("counters")).with_id("main");
        assert_eq!(record.id, "main");
    }
}
