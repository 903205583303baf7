use feedsim_core::models::{Candidate, Probability};

// Logistic head parameters (slope, center). Tunable, but fixed across
// calls so repeated scoring at one clock value is bit-identical.
const CLICK_SLOPE: f64 = 6.0;
const CLICK_CENTER: f64 = 0.45;
const WATCH_SLOPE: f64 = 5.0;
const WATCH_CENTER: f64 = 0.48;
const ENGAGE_SLOPE: f64 = 5.5;
const ENGAGE_CENTER: f64 = 0.50;
const SATISFY_SLOPE: f64 = 6.0;
const SATISFY_CENTER: f64 = 0.40;

/// Amplitude of the per-(id, clock) drift term.
const WOBBLE_AMPLITUDE: f64 = 0.05;
/// Prime modulus for the wobble's id reduction. Must not divide the
/// generator's channel id stride (100_000), so same-index ids from
/// different channels drift apart.
const WOBBLE_ID_MOD: u64 = 997;

// Blend weights for the shared base signal.
const BASE_RECALL_WEIGHT: f64 = 0.5;
const BASE_CREATOR_WEIGHT: f64 = 0.3;
const BASE_FRESHNESS_WEIGHT: f64 = 0.2;

/// The four objective head outputs for one candidate.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveHeads {
    pub p_click: Probability,
    pub p_watch: Probability,
    pub p_engage: Probability,
    pub p_satisfy: Probability,
}

/// Evaluate all four heads for a candidate at a clock value.
///
/// The wobble term models live score drift: it varies smoothly with the
/// clock, is keyed by the candidate id so items drift out of sync, and is
/// fully deterministic for a given (id, clock) pair.
pub fn evaluate(candidate: &Candidate, clock: f64) -> ObjectiveHeads {
    let base = BASE_RECALL_WEIGHT * candidate.recall_confidence.value()
        + BASE_CREATOR_WEIGHT * candidate.creator_quality.value()
        + BASE_FRESHNESS_WEIGHT * candidate.freshness.value();
    let freshness = candidate.freshness.value();
    let creator = candidate.creator_quality.value();

    let p_click = sigmoid(CLICK_SLOPE * (base - CLICK_CENTER) + wobble(candidate.id, clock, 1.0));
    let p_watch = sigmoid(
        WATCH_SLOPE * (0.55 * base + 0.45 * freshness - WATCH_CENTER)
            + wobble(candidate.id, clock, 2.0),
    );
    let p_engage = sigmoid(
        ENGAGE_SLOPE * (0.6 * creator + 0.4 * base - ENGAGE_CENTER)
            + wobble(candidate.id, clock, 3.0),
    );
    let p_satisfy = sigmoid(
        SATISFY_SLOPE * (0.5 * p_watch + 0.35 * p_engage + 0.15 * p_click - SATISFY_CENTER),
    );

    ObjectiveHeads {
        p_click: Probability::new(p_click),
        p_watch: Probability::new(p_watch),
        p_engage: Probability::new(p_engage),
        p_satisfy: Probability::new(p_satisfy),
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn wobble(id: u64, clock: f64, head_offset: f64) -> f64 {
    WOBBLE_AMPLITUDE * (clock * 0.9 + (id % WOBBLE_ID_MOD) as f64 * 0.37 + head_offset).sin()
}
