use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::models::Category;

/// Diversity allocator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    /// Length of the allocated list.
    pub slot_count: usize,
    /// Continuous exploration control in [0.05, 0.35]. The phase is derived
    /// from this value, never set directly.
    pub explore_ratio: f64,
    /// The session's fixed primary interest.
    pub primary_category: Category,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            slot_count: constants::DEFAULT_SLOT_COUNT,
            explore_ratio: defaults::DEFAULT_EXPLORE_RATIO,
            primary_category: Category::Comedy,
        }
    }
}
