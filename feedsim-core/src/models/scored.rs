use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::candidate::Candidate;
use super::probability::Probability;

/// Per-candidate disposition derived from its risk level during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gate {
    Pass,
    Downrank,
    Filtered,
}

/// Candidate plus multi-objective head outputs and the fused ranking score.
///
/// Invariant: `final_score == 0` iff `gate == Filtered`. Surviving
/// candidates are floored at 1 so the invariant holds at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub p_click: Probability,
    pub p_watch: Probability,
    pub p_engage: Probability,
    pub p_satisfy: Probability,
    /// Fused score in [0, 100].
    pub final_score: u8,
    pub gate: Gate,
}
