use serde::{Deserialize, Serialize};

use crate::constants;

/// Fusion weights over the four objective heads. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub click: f64,
    pub watch: f64,
    pub engage: f64,
    pub satisfy: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            click: 0.32,
            watch: 0.33,
            engage: 0.20,
            satisfy: 0.15,
        }
    }
}

/// Multi-objective scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: FusionWeights,
    /// Penalty subtracted from downranked (mid-risk) candidates.
    pub downrank_penalty: u8,
    /// Ranked-list truncation.
    pub top_k: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            downrank_penalty: constants::DEFAULT_DOWNRANK_PENALTY,
            top_k: constants::DEFAULT_RANK_TOP_K,
        }
    }
}
