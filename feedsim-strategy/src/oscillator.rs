use feedsim_core::models::{RankedCandidate, StrategyInput, StrategyWeights};

/// Oscillation amplitude for both adjustment terms.
const AMPLITUDE: f64 = 0.8;
/// Per-id phase offset so candidates oscillate out of sync.
const ID_PHASE_STEP: f64 = 0.9;
/// Prime modulus for the id reduction. Must not divide the generator's
/// channel id stride (100_000), or same-index ids from different channels
/// would collapse onto one phase.
const ID_PHASE_MOD: u64 = 997;
/// Periods of the two oscillators, deliberately co-prime-ish so their
/// combination does not repeat on a short cycle.
const BIZ_PERIOD: f64 = 4.0;
const ECO_PERIOD: f64 = 5.0;

/// Apply the business/ecological adjustment and re-rank.
///
/// `final = clamp(base + w.biz · biz + w.eco · eco, 0, 100)`; output is
/// stable-sorted descending by the adjusted score, ties keeping input
/// order. No side effects: the same (inputs, clock, weights) always yield
/// the same list.
pub fn apply_strategy(
    scored: &[StrategyInput],
    clock: f64,
    weights: StrategyWeights,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = scored
        .iter()
        .map(|input| {
            let phase = id_phase(input.id);
            let biz = (clock / BIZ_PERIOD + phase).sin() * AMPLITUDE;
            let eco = (clock / ECO_PERIOD + phase).cos() * AMPLITUDE;
            RankedCandidate {
                id: input.id,
                base: input.base,
                biz,
                eco,
                final_score: (input.base + weights.biz * biz + weights.eco * eco)
                    .clamp(0.0, 100.0),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Fixed per-id phase constant. Reduced by a prime modulus to keep the sine
/// argument small for large ids without aliasing the channel id layout.
fn id_phase(id: u64) -> f64 {
    (id % ID_PHASE_MOD) as f64 * ID_PHASE_STEP
}
