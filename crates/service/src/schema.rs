//! Collection definitions created by the seed migration.

use quarterseed_core::{
    AccessRules, COUNTERS_COLLECTION, Collection, CounterVariant, SchemaField,
    VALUE_QUARTERS_COLLECTION, VALUE_QUARTERS_QUARTER_INDEX,
};

/// `value_quarters`: required unique `quarter` text and required `value`
/// number. Public read, no public write.
#[must_use]
pub fn value_quarters_collection() -> Collection {
    Collection::new(VALUE_QUARTERS_COLLECTION)
        .with_field(SchemaField::text("quarter", true))
        .with_field(SchemaField::number("value", true))
        .with_rules(AccessRules::public_read())
        .with_index(VALUE_QUARTERS_QUARTER_INDEX)
}

/// `counters`: one optional `value` number; rules depend on the variant.
#[must_use]
pub fn counters_collection(variant: CounterVariant) -> Collection {
    Collection::new(COUNTERS_COLLECTION)
        .with_field(SchemaField::number("value", false))
        .with_rules(variant.rules())
}
