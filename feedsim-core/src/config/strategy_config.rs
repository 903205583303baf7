use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::StrategyWeights;

/// Strategy oscillator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub biz_weight: f64,
    pub eco_weight: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            biz_weight: defaults::DEFAULT_BIZ_WEIGHT,
            eco_weight: defaults::DEFAULT_ECO_WEIGHT,
        }
    }
}

impl StrategyConfig {
    pub fn weights(&self) -> StrategyWeights {
        StrategyWeights {
            biz: self.biz_weight,
            eco: self.eco_weight,
        }
    }
}
