use serde::{Deserialize, Serialize};

use crate::constants;

/// Retrieval funnel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    /// Max survivors per duplicate cluster.
    pub dedup_top_k: usize,
    /// Truncation size of the funnel output.
    pub output_size: usize,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            dedup_top_k: constants::DEFAULT_DEDUP_TOP_K,
            output_size: constants::DEFAULT_FUNNEL_OUTPUT,
        }
    }
}
