use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recall channels feeding the retrieval funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Channel {
    CollaborativeFiltering,
    VectorSimilarity,
    Trending,
    FollowGraph,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::CollaborativeFiltering,
        Channel::VectorSimilarity,
        Channel::Trending,
        Channel::FollowGraph,
    ];

    /// Stable ordinal, used for id offsets and salts.
    pub fn index(self) -> usize {
        match self {
            Channel::CollaborativeFiltering => 0,
            Channel::VectorSimilarity => 1,
            Channel::Trending => 2,
            Channel::FollowGraph => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::CollaborativeFiltering => "collaborative-filtering",
            Channel::VectorSimilarity => "vector-similarity",
            Channel::Trending => "trending",
            Channel::FollowGraph => "follow-graph",
        }
    }

    /// Risk gate thresholds `(mid, high)`: a per-item gate value above `high`
    /// yields high risk, above `mid` yields mid risk. Trending is the
    /// noisiest channel (lowest high threshold, most high-risk items);
    /// follow-graph is trust-based (highest threshold, fewest).
    pub fn risk_thresholds(self) -> (f64, f64) {
        match self {
            Channel::CollaborativeFiltering => (0.70, 0.88),
            Channel::VectorSimilarity => (0.72, 0.90),
            Channel::Trending => (0.62, 0.80),
            Channel::FollowGraph => (0.80, 0.95),
        }
    }

    /// Width of the duplicate-cluster window. Similarity-based recall
    /// clusters tighter, so it gets the smallest window (more duplicates).
    pub fn dup_window(self) -> u64 {
        match self {
            Channel::CollaborativeFiltering => 13,
            Channel::VectorSimilarity => 7,
            Channel::Trending => 17,
            Channel::FollowGraph => 19,
        }
    }
}

/// Risk level attached to every generated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Risk {
    Low,
    Mid,
    High,
}

/// Per-channel generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChannelSpec {
    pub channel: Channel,
    /// Number of candidates to generate for this channel.
    pub count: usize,
    /// Center of the recall-confidence distribution.
    pub score_bias: f64,
    /// Center of the freshness distribution.
    pub freshness_bias: f64,
    /// Base offset for duplicate-cluster ids, keeps channels in
    /// overlapping-but-distinct cluster ranges.
    pub dup_base: u32,
}
