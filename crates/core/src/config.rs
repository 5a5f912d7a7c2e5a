//! Seed configuration with environment overrides.

use crate::constants::DEFAULT_SEED;
use crate::counter::CounterVariant;
use crate::env_config::{env_parse_optional, env_parse_with_default};
use crate::quarter::QuarterRange;
use crate::seed_values::ValueBounds;

pub const ENV_SEED: &str = "QUARTERSEED_SEED";
pub const ENV_COUNTER_VARIANT: &str = "QUARTERSEED_COUNTER_VARIANT";

/// Everything the seed migration needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub seed: u64,
    pub bounds: ValueBounds,
    pub quarters: QuarterRange,
    pub counter_variant: CounterVariant,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bounds: ValueBounds::default(),
            quarters: QuarterRange::default(),
            counter_variant: CounterVariant::default(),
        }
    }
}

impl SeedConfig {
    /// Defaults overridden by `QUARTERSEED_SEED` and `QUARTERSEED_COUNTER_VARIANT`.
    /// An explicit counter variant wins over the environment.
    ///
    /// Logs a warning when the counter variant falls back to the default, since
    /// the two shipped variants disagree.
    #[must_use]
    pub fn from_env_with(counter_variant: Option<CounterVariant>) -> Self {
        let counter_variant = counter_variant
            .or_else(|| env_parse_optional(ENV_COUNTER_VARIANT))
            .unwrap_or_else(|| {
                let fallback = CounterVariant::default();
                tracing::warn!(
                    variant = %fallback,
                    "counter variant not set explicitly, using default"
                );
                fallback
            });
        Self {
            seed: env_parse_with_default(ENV_SEED, DEFAULT_SEED),
            counter_variant,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_counter_variant(mut self, variant: CounterVariant) -> Self {
        self.counter_variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SeedConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.quarters.len(), 108);
        assert_eq!(config.bounds, ValueBounds::default());
        assert_eq!(config.counter_variant, CounterVariant::Main);
    }

    #[test]
    fn explicit_variant_wins() {
        let config = SeedConfig::from_env_with(Some(CounterVariant::PublicCreate));
        assert_eq!(config.counter_variant, CounterVariant::PublicCreate);
    }
}
