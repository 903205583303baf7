use feedsim_core::models::{Channel, ChannelSpec};
use feedsim_gen::generate;
use proptest::prelude::*;

fn arb_channel() -> impl Strategy<Value = Channel> {
    prop_oneof![
        Just(Channel::CollaborativeFiltering),
        Just(Channel::VectorSimilarity),
        Just(Channel::Trending),
        Just(Channel::FollowGraph),
    ]
}

fn arb_spec() -> impl Strategy<Value = ChannelSpec> {
    (
        arb_channel(),
        0usize..150,
        0.3f64..0.9,
        0.3f64..0.9,
        0u32..500,
    )
        .prop_map(|(channel, count, score_bias, freshness_bias, dup_base)| ChannelSpec {
            channel,
            count,
            score_bias,
            freshness_bias,
            dup_base,
        })
}

// ── Reproducibility and bounds over arbitrary specs ──────────────────────

proptest! {
    #[test]
    fn generation_is_reproducible(
        seed in any::<u64>(),
        specs in proptest::collection::vec(arb_spec(), 0..5),
    ) {
        let a = generate(seed, &specs);
        let b = generate(seed, &specs);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.id, y.id);
            prop_assert_eq!(x.recall_confidence, y.recall_confidence);
            prop_assert_eq!(x.risk, y.risk);
            prop_assert_eq!(x.dup_cluster, y.dup_cluster);
        }
    }

    #[test]
    fn signals_always_bounded(
        seed in any::<u64>(),
        specs in proptest::collection::vec(arb_spec(), 1..4),
    ) {
        for c in generate(seed, &specs) {
            prop_assert!((0.25..=0.99).contains(&c.recall_confidence.value()));
            prop_assert!((0.25..=0.99).contains(&c.freshness.value()));
            prop_assert!((0.20..=0.98).contains(&c.creator_quality.value()));
        }
    }

    #[test]
    fn ids_stay_inside_the_id_space(
        seed in any::<u64>(),
        specs in proptest::collection::vec(arb_spec(), 1..4),
    ) {
        for c in generate(seed, &specs) {
            prop_assert!(c.id < feedsim_core::constants::ID_SPACE);
        }
    }
}
