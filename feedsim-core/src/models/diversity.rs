use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::probability::Probability;

/// Whether an output position was allocated to the user's established
/// interests (core) or deliberately diversified (exploration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SlotType {
    Core,
    Exploration,
}

/// Allocator phase, a pure function of the explore ratio — never stored
/// as independent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Phase {
    Optimize,
    Expand,
    Constrain,
}

/// One slot of an allocated diversity list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiversityItem {
    pub id: u64,
    pub category: Category,
    pub slot_type: SlotType,
    /// 1-based, contiguous: ranks of an n-item list are exactly {1..n}.
    pub rank: u32,
    pub phase: Phase,
    /// Adjusted relevance in [0, 1].
    pub score: Probability,
}

/// Aggregate metrics over one allocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllocationMetrics {
    /// In [10, 85].
    pub diversity_score: f64,
    /// In [70, 99].
    pub relevance_score: f64,
}
