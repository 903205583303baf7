use std::collections::HashMap;

use feedsim_core::models::{Candidate, Channel, Probability, Risk};
use feedsim_funnel::funnel;
use proptest::prelude::*;

fn arb_risk() -> impl Strategy<Value = Risk> {
    prop_oneof![Just(Risk::Low), Just(Risk::Mid), Just(Risk::High)]
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        any::<u64>(),
        0.0f64..=1.0,
        0.0f64..=1.0,
        arb_risk(),
        0u32..40,
    )
        .prop_map(|(id, recall, freshness, risk, dup_cluster)| Candidate {
            id,
            channel: Channel::Trending,
            recall_confidence: Probability::new(recall),
            freshness: Probability::new(freshness),
            creator_quality: Probability::new(0.5),
            risk,
            dup_cluster,
        })
}

fn arb_pools() -> impl Strategy<Value = Vec<Vec<Candidate>>> {
    proptest::collection::vec(proptest::collection::vec(arb_candidate(), 0..60), 0..4)
}

// ── Funnel invariants over arbitrary pools ───────────────────────────────

proptest! {
    #[test]
    fn narrowing_is_monotonic(
        pools in arb_pools(),
        top_k in 1usize..4,
        output_size in 0usize..120,
    ) {
        let out = funnel(&pools, top_k, output_size);
        prop_assert!(out.final_list.len() <= out.deduped.len());
        prop_assert!(out.deduped.len() <= out.filtered.len());
        prop_assert!(out.filtered.len() <= out.merged.len());
        prop_assert!(out.final_list.len() <= output_size);
    }

    #[test]
    fn high_risk_never_survives(pools in arb_pools(), top_k in 1usize..4) {
        let out = funnel(&pools, top_k, 80);
        prop_assert!(out.filtered.iter().all(|c| c.risk != Risk::High));
        prop_assert!(out.deduped.iter().all(|c| c.risk != Risk::High));
        prop_assert!(out.final_list.iter().all(|c| c.risk != Risk::High));
    }

    #[test]
    fn dedup_bound_holds(pools in arb_pools(), top_k in 1usize..4) {
        let out = funnel(&pools, top_k, 80);
        let mut per_cluster: HashMap<u32, usize> = HashMap::new();
        for c in &out.deduped {
            *per_cluster.entry(c.dup_cluster).or_default() += 1;
        }
        for (_, count) in per_cluster {
            prop_assert!(count <= top_k);
        }
    }

    #[test]
    fn funnel_is_deterministic(pools in arb_pools()) {
        let a = funnel(&pools, 2, 80);
        let b = funnel(&pools, 2, 80);
        let ids = |v: &[Candidate]| v.iter().map(|c| c.id).collect::<Vec<_>>();
        prop_assert_eq!(ids(&a.merged), ids(&b.merged));
        prop_assert_eq!(ids(&a.deduped), ids(&b.deduped));
        prop_assert_eq!(ids(&a.final_list), ids(&b.final_list));
    }
}
