//! Core types for quarterseed
//!
//! This crate contains domain types shared across all other crates:
//! collection schemas, records, quarters and the seed value generator.

mod collection;
mod config;
pub mod constants;
mod counter;
pub mod env_config;
mod error;
mod quarter;
mod record;
mod seed_values;

pub use collection::*;
pub use config::*;
pub use constants::*;
pub use counter::*;
pub use error::*;
pub use quarter::*;
pub use record::*;
pub use seed_values::*;
