use std::collections::BTreeSet;

use feedsim_core::constants::{ID_SPACE, MAX_EXPLORE_SLOTS, MIN_EXPLORE_SLOTS};
use feedsim_core::models::{
    Category, DiversityItem, InterestProfile, Phase, Probability, SlotType,
};
use feedsim_core::noise;

use crate::phase;

/// Base exploration-slot positions over a 12-item window, rotated by the
/// seed and truncated to the slot budget.
const SLOT_PATTERN: [usize; 6] = [1, 3, 5, 8, 10, 11];

// Score formula terms.
const SCORE_BASE: f64 = 0.55;
const PRIMARY_BOOST: f64 = 0.25;
const SECONDARY_BOOST: f64 = 0.15;
const EXPLORE_PENALTY: f64 = -0.08;
const SCORE_NOISE: f64 = 0.04;

const SALT_OPTIMIZE_SWAP: u64 = 0xD1;
const SALT_SCORE: u64 = 0xD2;

/// Allocate an n-item diversity list.
///
/// Deterministic in (n, ratio, interest, seed): the noise terms are keyed
/// by seed and position only, never by a clock, so re-renders at a fixed
/// seed are stable even in the constrain phase's re-sorted order.
pub fn allocate(
    n: usize,
    explore_ratio: f64,
    interest: &InterestProfile,
    seed: u64,
) -> Vec<DiversityItem> {
    if n == 0 {
        return Vec::new();
    }

    let ratio = phase::clamp_ratio(explore_ratio);
    let current_phase = phase::phase_from_explore_ratio(ratio);
    let explore_slots =
        ((n as f64 * ratio).round() as usize).clamp(MIN_EXPLORE_SLOTS, MAX_EXPLORE_SLOTS);

    // Rotating the fixed pattern can collide positions when n < 12; the
    // set collapses collisions, leaving fewer exploration slots.
    let rotation = (seed % n as u64) as usize;
    let explore_positions: BTreeSet<usize> = SLOT_PATTERN
        .iter()
        .take(explore_slots)
        .map(|p| (p + rotation) % n)
        .collect();

    let core_pool = core_pool(interest);
    let neighbor_pool = neighbor_pool(interest);
    let mut core_cursor = 0usize;
    let mut neighbor_cursor = 0usize;

    let mut items: Vec<DiversityItem> = Vec::with_capacity(n);
    let mut prev_category: Option<Category> = None;

    for position in 0..n {
        let slot_type = if explore_positions.contains(&position) {
            SlotType::Exploration
        } else {
            SlotType::Core
        };

        let category = match current_phase {
            // No slot distinction: mostly primary, with a ratio-proportional
            // chance of a neighboring category.
            Phase::Optimize => {
                if noise::unit(seed, position as u64 ^ SALT_OPTIMIZE_SWAP) < ratio {
                    next_from(&neighbor_pool, &mut neighbor_cursor)
                } else {
                    interest.primary
                }
            }
            Phase::Expand => match slot_type {
                SlotType::Exploration => next_from(&neighbor_pool, &mut neighbor_cursor),
                SlotType::Core => next_from(&core_pool, &mut core_cursor),
            },
            Phase::Constrain => {
                let (pool, cursor) = match slot_type {
                    SlotType::Exploration => (&neighbor_pool, &mut neighbor_cursor),
                    SlotType::Core => (&core_pool, &mut core_cursor),
                };
                next_avoiding(pool, cursor, prev_category)
            }
        };

        let score = item_score(category, slot_type, current_phase, interest, seed, position);

        items.push(DiversityItem {
            id: seed.wrapping_mul(131).wrapping_add(position as u64) % ID_SPACE,
            category,
            slot_type,
            rank: (position + 1) as u32,
            phase: current_phase,
            score,
        });
        prev_category = Some(category);
    }

    // Constrain re-ranks by adjusted relevance; the other phases keep
    // positional order as rank.
    if current_phase == Phase::Constrain {
        items.sort_by(|a, b| {
            b.score
                .value()
                .partial_cmp(&a.score.value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (position, item) in items.iter_mut().enumerate() {
            item.rank = (position + 1) as u32;
        }
    }

    items
}

/// Core-slot category pool: mostly primary, with the liked secondary mixed
/// in once it exists.
fn core_pool(interest: &InterestProfile) -> Vec<Category> {
    let p = interest.primary;
    match interest.secondary {
        Some(s) => vec![p, p, p, p, p, s],
        None => vec![p],
    }
}

/// Exploration pool: categories adjacent to the user's interests. The liked
/// secondary leads the pool so it shows up in exploration slots first.
fn neighbor_pool(interest: &InterestProfile) -> Vec<Category> {
    let [a, b] = interest.primary.neighbors();
    let candidates = match interest.secondary {
        Some(s) => {
            let [c, d] = s.neighbors();
            vec![s, a, c, b, d]
        }
        None => vec![a, b],
    };
    // Membership dedup, keeping first-seen order. On an 8-category ring the
    // primary's and secondary's neighborhoods can overlap non-consecutively.
    let mut pool: Vec<Category> = Vec::with_capacity(candidates.len());
    for category in candidates {
        if category != interest.primary && !pool.contains(&category) {
            pool.push(category);
        }
    }
    pool
}

/// Advance a cyclic cursor through a pool.
fn next_from(pool: &[Category], cursor: &mut usize) -> Category {
    let category = pool[*cursor % pool.len()];
    *cursor += 1;
    category
}

/// Like [`next_from`], but skip a category equal to the previous position's,
/// unless the pool has no alternative.
fn next_avoiding(pool: &[Category], cursor: &mut usize, previous: Option<Category>) -> Category {
    for _ in 0..pool.len() {
        let category = next_from(pool, cursor);
        if Some(category) != previous {
            return category;
        }
    }
    next_from(pool, cursor)
}

fn item_score(
    category: Category,
    slot_type: SlotType,
    current_phase: Phase,
    interest: &InterestProfile,
    seed: u64,
    position: usize,
) -> Probability {
    let mut score = SCORE_BASE;
    if category == interest.primary {
        score += PRIMARY_BOOST;
    }
    if Some(category) == interest.secondary {
        score += SECONDARY_BOOST;
    }
    if slot_type == SlotType::Exploration {
        score += EXPLORE_PENALTY;
    }
    score += match current_phase {
        Phase::Optimize => 0.05,
        Phase::Expand => 0.0,
        Phase::Constrain => 0.02,
    };
    score += noise::signed(seed, position as u64 ^ SALT_SCORE, SCORE_NOISE);
    Probability::new(score)
}
