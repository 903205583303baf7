//! Per-stage configuration, aggregated into [`SimulationConfig`].
//!
//! Every struct is serde-default so a partial TOML document (or an empty
//! one) yields a fully usable configuration.

mod defaults;
mod diversity_config;
mod funnel_config;
mod generator_config;
mod scoring_config;
mod strategy_config;

pub use diversity_config::DiversityConfig;
pub use funnel_config::FunnelConfig;
pub use generator_config::GeneratorConfig;
pub use scoring_config::{FusionWeights, ScoringConfig};
pub use strategy_config::StrategyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{SimError, SimResult};

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generator: GeneratorConfig,
    pub funnel: FunnelConfig,
    pub scoring: ScoringConfig,
    pub diversity: DiversityConfig,
    pub strategy: StrategyConfig,
}

impl SimulationConfig {
    /// Parse from a TOML document, then validate.
    pub fn from_toml_str(input: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no amount of clamping can make sensible.
    pub fn validate(&self) -> SimResult<()> {
        if self.generator.channels.is_empty() {
            return Err(SimError::InvalidConfig {
                reason: "generator.channels must not be empty".to_string(),
            });
        }
        if self.funnel.dedup_top_k == 0 {
            return Err(SimError::InvalidConfig {
                reason: "funnel.dedup_top_k must be at least 1".to_string(),
            });
        }
        let w = &self.scoring.weights;
        let sum = w.click + w.watch + w.engage + w.satisfy;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SimError::InvalidConfig {
                reason: format!("scoring.weights must sum to 1.0, got {}", sum),
            });
        }
        Ok(())
    }
}
