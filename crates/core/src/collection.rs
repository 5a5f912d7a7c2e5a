//! Collection schema definitions.
//!
//! A collection is a named schema container: typed fields, per-operation
//! access rules and raw index statements. Rules are stored verbatim and
//! never evaluated here.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use rand::distributions::{Distribution as _, Uniform};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ID_LENGTH;
use crate::error::CoreError;

/// Field value type understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
}

impl FieldType {
    /// Whether a JSON value is acceptable for this field type. `null` is
    /// accepted by every type; requiredness is checked separately.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::Text, Value::String(_)) => true,
            (Self::Number, Value::Number(n)) => n.as_f64().is_some_and(f64::is_finite),
            _ => false,
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

impl SchemaField {
    pub fn text(name: impl Into<String>, required: bool) -> Self {
        Self { name: name.into(), field_type: FieldType::Text, required }
    }

    pub fn number(name: impl Into<String>, required: bool) -> Self {
        Self { name: name.into(), field_type: FieldType::Number, required }
    }

    /// Whether `value` satisfies this field. Empty strings count as missing
    /// for required text fields.
    #[must_use]
    pub fn is_satisfied_by(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => !self.required,
            Some(Value::String(s)) if self.required && s.is_empty() => false,
            Some(v) => self.field_type.accepts(v),
        }
    }
}

/// Access rule for one operation.
///
/// `None` is restricted (superuser only); `Some("")` is unrestricted; any
/// other string is a filter expression kept as-is.
pub type Rule = Option<String>;

/// Unrestricted rule.
#[must_use]
pub fn public_rule() -> Rule {
    Some(String::new())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessRules {
    pub list: Rule,
    pub view: Rule,
    pub create: Rule,
    pub update: Rule,
    pub delete: Rule,
}

impl AccessRules {
    /// Public list/view, every write restricted.
    #[must_use]
    pub fn public_read() -> Self {
        Self { list: public_rule(), view: public_rule(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    #[default]
    Base,
}

impl Display for CollectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::Base => write!(f, "base"),
        }
    }
}

impl FromStr for CollectionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            _ => Err(CoreError::InvalidInput(format!("unknown collection kind: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub fields: Vec<SchemaField>,
    pub rules: AccessRules,
    pub indexes: Vec<String>,
}

impl Collection {
    /// New base collection with a freshly generated id and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            kind: CollectionKind::Base,
            fields: Vec::new(),
            rules: AccessRules::default(),
            indexes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: AccessRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_index(mut self, statement: impl Into<String>) -> Self {
        self.indexes.push(statement.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `key` matches this collection's name or id.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.id == key
    }
}

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Host-style identifier: 15 lowercase alphanumerics, uniformly drawn.
#[must_use]
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let index = Uniform::from(0..ID_ALPHABET.len());
    (0..ID_LENGTH).map(|_| char::from(ID_ALPHABET[index.sample(&mut rng)])).collect()
}
