//! Default values shared by the config structs.

use crate::models::{Channel, ChannelSpec};

pub const DEFAULT_SEED: u64 = 7;
pub const DEFAULT_EXPLORE_RATIO: f64 = 0.18;
pub const DEFAULT_BIZ_WEIGHT: f64 = 1.0;
pub const DEFAULT_ECO_WEIGHT: f64 = 1.0;

/// The stock four-channel recall mix.
pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec {
            channel: Channel::CollaborativeFiltering,
            count: 120,
            score_bias: 0.62,
            freshness_bias: 0.55,
            dup_base: 100,
        },
        ChannelSpec {
            channel: Channel::VectorSimilarity,
            count: 100,
            score_bias: 0.66,
            freshness_bias: 0.50,
            dup_base: 140,
        },
        ChannelSpec {
            channel: Channel::Trending,
            count: 80,
            score_bias: 0.58,
            freshness_bias: 0.78,
            dup_base: 200,
        },
        ChannelSpec {
            channel: Channel::FollowGraph,
            count: 60,
            score_bias: 0.70,
            freshness_bias: 0.60,
            dup_base: 260,
        },
    ]
}
