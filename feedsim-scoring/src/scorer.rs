use feedsim_core::config::ScoringConfig;
use feedsim_core::models::{Candidate, Gate, Risk, ScoredCandidate};

use crate::objectives;

/// Score candidates with the default configuration.
pub fn score(candidates: &[Candidate], clock: f64) -> Vec<ScoredCandidate> {
    score_with(candidates, clock, &ScoringConfig::default())
}

/// Score every candidate: evaluate the objective heads, fuse them into one
/// [0, 100] scalar, and apply the risk gate. Output preserves input order;
/// use [`top_k`] for the ranked view.
pub fn score_with(
    candidates: &[Candidate],
    clock: f64,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .map(|candidate| {
            let heads = objectives::evaluate(candidate, clock);
            let fused = 100.0
                * (config.weights.click * heads.p_click.value()
                    + config.weights.watch * heads.p_watch.value()
                    + config.weights.engage * heads.p_engage.value()
                    + config.weights.satisfy * heads.p_satisfy.value());

            // Surviving candidates floor at 1 so final_score == 0 holds
            // exactly for the filtered gate.
            let (gate, final_score) = match candidate.risk {
                Risk::High => (Gate::Filtered, 0),
                Risk::Mid => (
                    Gate::Downrank,
                    (fused.round() as i64 - config.downrank_penalty as i64).clamp(1, 100) as u8,
                ),
                Risk::Low => (Gate::Pass, (fused.round() as i64).clamp(1, 100) as u8),
            };

            ScoredCandidate {
                candidate: candidate.clone(),
                p_click: heads.p_click,
                p_watch: heads.p_watch,
                p_engage: heads.p_engage,
                p_satisfy: heads.p_satisfy,
                final_score,
                gate,
            }
        })
        .collect()
}

/// Ranked view: drop filtered candidates, stable-sort descending by
/// final score (ties keep input order), truncate to `k`.
pub fn top_k(scored: &[ScoredCandidate], k: usize) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = scored
        .iter()
        .filter(|s| s.gate != Gate::Filtered)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    ranked.truncate(k);
    ranked
}
