use feedsim_core::constants::{CHANNEL_ID_STRIDE, ID_SEED_MULT, ID_SPACE};
use feedsim_core::models::{Candidate, ChannelSpec, Probability, Risk};
use feedsim_core::noise;

// Clamp bounds for the generated signals.
const RECALL_MIN: f64 = 0.25;
const RECALL_MAX: f64 = 0.99;
const FRESHNESS_MIN: f64 = 0.25;
const FRESHNESS_MAX: f64 = 0.99;
const CREATOR_MIN: f64 = 0.20;
const CREATOR_MAX: f64 = 0.98;
const CREATOR_MIDPOINT: f64 = 0.55;

// Noise salts, one stream per derived field.
const SALT_RECALL: u64 = 0x51;
const SALT_FRESHNESS: u64 = 0x52;
const SALT_CREATOR: u64 = 0x53;
const SALT_RISK: u64 = 0x54;

/// Generate one pool per channel spec, in spec order.
pub fn generate_pools(seed: u64, specs: &[ChannelSpec]) -> Vec<Vec<Candidate>> {
    specs
        .iter()
        .map(|spec| {
            (0..spec.count)
                .map(|index| build_candidate(seed, spec, index))
                .collect()
        })
        .collect()
}

/// Generate the full candidate population, concatenated in spec order.
pub fn generate(seed: u64, specs: &[ChannelSpec]) -> Vec<Candidate> {
    generate_pools(seed, specs).into_iter().flatten().collect()
}

fn build_candidate(seed: u64, spec: &ChannelSpec, index: usize) -> Candidate {
    let channel_offset = spec.channel.index() as u64 * CHANNEL_ID_STRIDE;
    let id = seed
        .wrapping_mul(ID_SEED_MULT)
        .wrapping_add(index as u64 + channel_offset)
        % ID_SPACE;

    // Each per-item salt mixes the channel and index so the four channels
    // draw from independent noise streams under one seed.
    let item_salt = channel_offset + index as u64;

    let recall_confidence = spec.score_bias
        + noise::oscillation(index, seed, 0.7, 0.08)
        + noise::signed(seed, item_salt ^ SALT_RECALL, 0.05);
    let freshness = spec.freshness_bias
        + noise::oscillation(index, seed, 1.3, 0.10)
        + noise::signed(seed, item_salt ^ SALT_FRESHNESS, 0.05);
    let creator_quality = CREATOR_MIDPOINT
        + noise::oscillation(index, seed, 0.9, 0.12)
        + noise::signed(seed, item_salt ^ SALT_CREATOR, 0.06);

    let risk_gate = noise::unit(seed, item_salt ^ SALT_RISK);
    let dup_cluster =
        spec.dup_base + (seed.wrapping_add(index as u64) % spec.channel.dup_window()) as u32;

    Candidate {
        id,
        channel: spec.channel,
        recall_confidence: Probability::new(recall_confidence.clamp(RECALL_MIN, RECALL_MAX)),
        freshness: Probability::new(freshness.clamp(FRESHNESS_MIN, FRESHNESS_MAX)),
        creator_quality: Probability::new(creator_quality.clamp(CREATOR_MIN, CREATOR_MAX)),
        risk: derive_risk(risk_gate, spec.channel.risk_thresholds()),
        dup_cluster,
    }
}

/// Map a uniform gate value to a risk level using per-channel thresholds.
fn derive_risk(gate: f64, (mid, high): (f64, f64)) -> Risk {
    if gate >= high {
        Risk::High
    } else if gate >= mid {
        Risk::Mid
    } else {
        Risk::Low
    }
}
