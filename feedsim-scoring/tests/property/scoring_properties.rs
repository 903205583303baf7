use feedsim_core::models::{Candidate, Channel, Gate, Probability, Risk};
use feedsim_scoring::{score, top_k};
use proptest::prelude::*;

fn arb_risk() -> impl Strategy<Value = Risk> {
    prop_oneof![Just(Risk::Low), Just(Risk::Mid), Just(Risk::High)]
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        any::<u64>(),
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        arb_risk(),
    )
        .prop_map(|(id, recall, freshness, creator, risk)| Candidate {
            id,
            channel: Channel::VectorSimilarity,
            recall_confidence: Probability::new(recall),
            freshness: Probability::new(freshness),
            creator_quality: Probability::new(creator),
            risk,
            dup_cluster: 0,
        })
}

// ── Gating and bounds over arbitrary candidates ──────────────────────────

proptest! {
    #[test]
    fn zero_score_iff_filtered(
        candidates in proptest::collection::vec(arb_candidate(), 0..80),
        clock in 0.0f64..100.0,
    ) {
        for s in score(&candidates, clock) {
            prop_assert_eq!(s.final_score == 0, s.gate == Gate::Filtered);
        }
    }

    #[test]
    fn scores_and_probabilities_bounded(
        candidates in proptest::collection::vec(arb_candidate(), 0..80),
        clock in -100.0f64..100.0,
    ) {
        for s in score(&candidates, clock) {
            prop_assert!(s.final_score <= 100);
            for p in [s.p_click, s.p_watch, s.p_engage, s.p_satisfy] {
                prop_assert!((0.0..=1.0).contains(&p.value()));
            }
        }
    }

    #[test]
    fn scoring_is_pure_at_fixed_clock(
        candidates in proptest::collection::vec(arb_candidate(), 0..40),
        clock in 0.0f64..50.0,
    ) {
        let a = score(&candidates, clock);
        let b = score(&candidates, clock);
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.final_score, y.final_score);
            prop_assert_eq!(x.gate, y.gate);
        }
    }

    #[test]
    fn top_k_is_sorted_and_capped(
        candidates in proptest::collection::vec(arb_candidate(), 0..80),
        k in 0usize..60,
    ) {
        let ranked = top_k(&score(&candidates, 0.0), k);
        prop_assert!(ranked.len() <= k);
        prop_assert!(ranked.windows(2).all(|w| w[0].final_score >= w[1].final_score));
        prop_assert!(ranked.iter().all(|s| s.gate != Gate::Filtered));
    }
}
