//! Test utilities and module declarations for storage tests.

#![allow(clippy::unwrap_used, reason = "test code")]

use quarterseed_core::{
    AccessRules, Collection, Record, SchemaField, VALUE_QUARTERS_COLLECTION,
    VALUE_QUARTERS_QUARTER_INDEX,
};

pub fn create_value_quarters() -> Collection {
    Collection::new(VALUE_QUARTERS_COLLECTION)
        .with_field(SchemaField::text("quarter", true))
        .with_field(SchemaField::number("value", true))
        .with_rules(AccessRules::public_read())
        .with_index(VALUE_QUARTERS_QUARTER_INDEX)
}

pub fn create_quarter_record(collection: &Collection, quarter: &str, value: f64) -> Record {
    let mut record = Record::new(collection);
    record.set("quarter", quarter);
    record.set("value", value);
    record
}

mod memory_tests;
