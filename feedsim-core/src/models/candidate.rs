use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::channel::{Channel, Risk};
use super::probability::Probability;

/// One synthetic content item, produced once per generation pass.
///
/// Immutable after generation: downstream stages attach derived fields
/// (scores, gate, rank) in their own wrapper types instead of mutating
/// the source signals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Candidate {
    /// Seed-derived id. Unique within a batch for practical purposes;
    /// collisions across channels are tolerated.
    pub id: u64,
    pub channel: Channel,
    pub recall_confidence: Probability,
    pub freshness: Probability,
    pub creator_quality: Probability,
    pub risk: Risk,
    /// Near-duplicate group. The funnel caps survivors per cluster.
    pub dup_cluster: u32,
}
