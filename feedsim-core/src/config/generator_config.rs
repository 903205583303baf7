use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ChannelSpec;

/// Generator stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the whole generation pass. Same seed + specs ⇒ same output.
    pub seed: u64,
    pub channels: Vec<ChannelSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: defaults::DEFAULT_SEED,
            channels: defaults::default_channels(),
        }
    }
}
