use serde::{Deserialize, Serialize};
use ts_rs::TS;

use feedsim_core::models::{
    AllocationMetrics, DiversityItem, InterestProfile, RankedCandidate, ScoredCandidate,
};
use feedsim_funnel::FunnelOutput;

/// Everything one pipeline pass produces, bundled for the presentation
/// layer: the funnel's intermediate lists, the scored and ranked feeds,
/// the diversity allocation with its metrics, and the strategy-adjusted
/// final ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedSnapshot {
    pub seed: u64,
    pub clock: f64,
    pub funnel: FunnelOutput,
    /// Scored funnel output, input order.
    pub scored: Vec<ScoredCandidate>,
    /// Top-k ranked view of `scored`.
    pub ranked: Vec<ScoredCandidate>,
    /// Diversity allocation for the slot window.
    pub allocation: Vec<DiversityItem>,
    pub metrics: AllocationMetrics,
    /// Strategy-adjusted final ordering of the ranked feed.
    pub adjusted: Vec<RankedCandidate>,
    /// Interest profile in effect during this pass.
    pub interest: InterestProfile,
}
