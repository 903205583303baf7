use feedsim_core::models::{Category, InterestProfile, Phase};
use feedsim_diversity::{allocate, allocation_metrics, phase_from_explore_ratio};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Comedy),
        Just(Category::Music),
        Just(Category::Dance),
        Just(Category::Food),
        Just(Category::Travel),
        Just(Category::Sports),
        Just(Category::Gaming),
        Just(Category::Pets),
    ]
}

fn arb_interest() -> impl Strategy<Value = InterestProfile> {
    (arb_category(), proptest::option::of(arb_category())).prop_map(|(primary, secondary)| {
        InterestProfile { primary, secondary }
    })
}

// ── Rank contiguity and bounds over arbitrary inputs ─────────────────────

proptest! {
    #[test]
    fn ranks_form_exactly_one_to_n(
        n in 1usize..40,
        ratio in -0.5f64..1.0,
        interest in arb_interest(),
        seed in any::<u64>(),
    ) {
        let items = allocate(n, ratio, &interest, seed);
        prop_assert_eq!(items.len(), n);
        let mut ranks: Vec<u32> = items.iter().map(|i| i.rank).collect();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=n as u32).collect::<Vec<u32>>());
    }

    #[test]
    fn scores_stay_in_unit_interval(
        n in 1usize..40,
        ratio in 0.05f64..=0.35,
        interest in arb_interest(),
        seed in any::<u64>(),
    ) {
        for item in allocate(n, ratio, &interest, seed) {
            prop_assert!((0.0..=1.0).contains(&item.score.value()));
        }
    }

    #[test]
    fn phase_matches_the_ratio_on_every_item(
        n in 1usize..40,
        ratio in 0.05f64..=0.35,
        interest in arb_interest(),
        seed in any::<u64>(),
    ) {
        let expected = phase_from_explore_ratio(ratio);
        for item in allocate(n, ratio, &interest, seed) {
            prop_assert_eq!(item.phase, expected);
        }
    }

    #[test]
    fn phase_step_function_breakpoints(ratio in 0.05f64..=0.35) {
        let phase = phase_from_explore_ratio(ratio);
        if ratio < 0.12 {
            prop_assert_eq!(phase, Phase::Optimize);
        } else if ratio < 0.24 {
            prop_assert_eq!(phase, Phase::Expand);
        } else {
            prop_assert_eq!(phase, Phase::Constrain);
        }
    }

    #[test]
    fn metrics_bounded_for_any_allocation(
        n in 0usize..40,
        ratio in -0.5f64..1.0,
        interest in arb_interest(),
        seed in any::<u64>(),
    ) {
        let items = allocate(n, ratio, &interest, seed);
        let m = allocation_metrics(&items, &interest, ratio);
        prop_assert!((10.0..=85.0).contains(&m.diversity_score));
        prop_assert!((70.0..=99.0).contains(&m.relevance_score));
    }

    #[test]
    fn allocation_is_reproducible(
        n in 1usize..40,
        ratio in 0.05f64..=0.35,
        interest in arb_interest(),
        seed in any::<u64>(),
    ) {
        let a = allocate(n, ratio, &interest, seed);
        let b = allocate(n, ratio, &interest, seed);
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.category, y.category);
            prop_assert_eq!(x.rank, y.rank);
            prop_assert_eq!(x.score, y.score);
        }
    }
}
