use feedsim_core::models::{StrategyInput, StrategyWeights};
use feedsim_strategy::apply_strategy;
use proptest::prelude::*;

fn arb_inputs() -> impl Strategy<Value = Vec<StrategyInput>> {
    proptest::collection::vec(
        (any::<u64>(), 0.0f64..=100.0).prop_map(|(id, base)| StrategyInput { id, base }),
        0..60,
    )
}

// ── Oscillator invariants over arbitrary inputs ──────────────────────────

proptest! {
    #[test]
    fn final_scores_always_bounded(
        inputs in arb_inputs(),
        clock in -1000.0f64..1000.0,
        biz in -5.0f64..5.0,
        eco in -5.0f64..5.0,
    ) {
        for r in apply_strategy(&inputs, clock, StrategyWeights { biz, eco }) {
            prop_assert!((0.0..=100.0).contains(&r.final_score));
            prop_assert!(r.biz.abs() <= 0.8 + f64::EPSILON);
            prop_assert!(r.eco.abs() <= 0.8 + f64::EPSILON);
        }
    }

    #[test]
    fn output_is_sorted_descending(inputs in arb_inputs(), clock in 0.0f64..100.0) {
        let out = apply_strategy(&inputs, clock, StrategyWeights::default());
        prop_assert!(out.windows(2).all(|w| w[0].final_score >= w[1].final_score));
    }

    #[test]
    fn evaluation_is_pure(inputs in arb_inputs(), clock in 0.0f64..100.0) {
        let a = apply_strategy(&inputs, clock, StrategyWeights::default());
        let b = apply_strategy(&inputs, clock, StrategyWeights::default());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.id, y.id);
            prop_assert_eq!(x.final_score, y.final_score);
        }
    }

    #[test]
    fn zero_weights_preserve_base_order(inputs in arb_inputs(), clock in 0.0f64..100.0) {
        let out = apply_strategy(&inputs, clock, StrategyWeights { biz: 0.0, eco: 0.0 });
        for r in &out {
            prop_assert_eq!(r.final_score, r.base.clamp(0.0, 100.0));
        }
    }
}
