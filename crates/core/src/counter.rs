//! Variants of the `counters` collection definition.
//!
//! Two definitions have shipped: one keyed `main` that allows public
//! updates only, and one keyed `maincounterid00` that also allows public
//! creates. Which is authoritative is unresolved, so both are selectable.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collection::{AccessRules, public_rule};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterVariant {
    /// Record id `main`; public list/view/update, restricted create/delete.
    #[default]
    Main,
    /// Record id `maincounterid00`; public list/view/create/update, restricted delete.
    PublicCreate,
}

impl CounterVariant {
    #[must_use]
    pub const fn record_id(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::PublicCreate => "maincounterid00",
        }
    }

    #[must_use]
    pub fn rules(self) -> AccessRules {
        let create = match self {
            Self::Main => None,
            Self::PublicCreate => public_rule(),
        };
        AccessRules {
            list: public_rule(),
            view: public_rule(),
            create,
            update: public_rule(),
            delete: None,
        }
    }
}

impl Display for CounterVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Self::Main => write!(f, "main"),
            Self::PublicCreate => write!(f, "public-create"),
        }
    }
}

impl FromStr for CounterVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "public-create" | "public_create" => Ok(Self::PublicCreate),
            _ => Err(CoreError::InvalidInput(format!("unknown counter variant: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_only_in_create_rule_and_id() {
        let main = CounterVariant::Main.rules();
        let open = CounterVariant::PublicCreate.rules();
        assert!(main.create.is_none());
        assert_eq!(open.create.as_deref(), Some(""));
        assert_eq!(main.update, open.update);
        assert_eq!(main.delete, None);
        assert_ne!(CounterVariant::Main.record_id(), CounterVariant::PublicCreate.record_id());
    }

    #[test]
    fn parse_round_trips_display() {
        for variant in [CounterVariant::Main, CounterVariant::PublicCreate] {
            assert_eq!(variant.to_string().parse::<CounterVariant>(), Ok(variant));
        }
        assert!("other".parse::<CounterVariant>().is_err());
    }
}
