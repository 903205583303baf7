use std::collections::BTreeSet;

use feedsim_core::constants::{EXPLORE_RATIO_MAX, EXPLORE_RATIO_MIN};
use feedsim_core::models::{AllocationMetrics, DiversityItem, InterestProfile, Phase};

use crate::phase;

// Relevance match weights by interest tier.
const PRIMARY_MATCH: f64 = 1.0;
const SECONDARY_MATCH: f64 = 0.65;
const OTHER_MATCH: f64 = 0.25;

// Phase-dependent adjustment weights (diversity, relevance).
fn phase_weights(p: Phase) -> (f64, f64) {
    match p {
        Phase::Optimize => (0.90, 1.02),
        Phase::Expand => (1.05, 0.98),
        Phase::Constrain => (1.00, 1.00),
    }
}

/// Aggregate diversity and relevance over one allocation.
///
/// Diversity grows with distinct categories; relevance averages the match
/// weight of each item against the interest profile. Both are then adjusted
/// by the phase weight and by where the ratio sits inside its valid range.
pub fn allocation_metrics(
    items: &[DiversityItem],
    interest: &InterestProfile,
    explore_ratio: f64,
) -> AllocationMetrics {
    let ratio = phase::clamp_ratio(explore_ratio);
    let current_phase = phase::phase_from_explore_ratio(ratio);
    let normalized = (ratio - EXPLORE_RATIO_MIN) / (EXPLORE_RATIO_MAX - EXPLORE_RATIO_MIN);

    let distinct: usize = items
        .iter()
        .map(|i| i.category)
        .collect::<BTreeSet<_>>()
        .len();
    let diversity = (10.0 + 12.0 * (distinct.saturating_sub(1)) as f64).clamp(10.0, 85.0);

    let avg_match = if items.is_empty() {
        0.0
    } else {
        items
            .iter()
            .map(|i| {
                if i.category == interest.primary {
                    PRIMARY_MATCH
                } else if Some(i.category) == interest.secondary {
                    SECONDARY_MATCH
                } else {
                    OTHER_MATCH
                }
            })
            .sum::<f64>()
            / items.len() as f64
    };
    let relevance = 70.0 + 29.0 * avg_match;

    let (diversity_weight, relevance_weight) = phase_weights(current_phase);
    AllocationMetrics {
        diversity_score: (diversity * diversity_weight + 8.0 * normalized).clamp(10.0, 85.0),
        relevance_score: (relevance * relevance_weight - 6.0 * normalized).clamp(70.0, 99.0),
    }
}
