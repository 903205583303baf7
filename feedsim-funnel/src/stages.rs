use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use feedsim_core::models::{Candidate, Risk};

/// Weight of freshness in the global merge ordering.
const MERGE_FRESHNESS_WEIGHT: f64 = 0.25;
/// Weight of freshness when picking survivors within a duplicate cluster.
const DEDUP_FRESHNESS_WEIGHT: f64 = 0.15;

/// All four funnel stages. Each list narrows the previous one:
/// `|final| ≤ |deduped| ≤ |filtered| ≤ |merged|`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunnelOutput {
    /// All pools concatenated, sorted by the merge key.
    pub merged: Vec<Candidate>,
    /// `merged` minus high-risk items, order preserved.
    pub filtered: Vec<Candidate>,
    /// `filtered` capped per duplicate cluster, re-sorted by the merge key.
    pub deduped: Vec<Candidate>,
    /// First `output_size` items of `deduped`.
    pub final_list: Vec<Candidate>,
}

/// Run the full funnel over per-channel candidate pools.
///
/// Pools are an ordered slice (not a map) so tie-breaking by input order is
/// well-defined and reproducible. Short inputs narrow the output instead of
/// erroring; empty input yields four empty lists.
pub fn funnel(pools: &[Vec<Candidate>], dedup_top_k: usize, output_size: usize) -> FunnelOutput {
    let mut merged: Vec<Candidate> = pools.iter().flatten().cloned().collect();
    sort_desc_stable(&mut merged, merge_key);

    let filtered: Vec<Candidate> = merged
        .iter()
        .filter(|c| c.risk != Risk::High)
        .cloned()
        .collect();

    let deduped = dedup(&filtered, dedup_top_k);

    let final_list: Vec<Candidate> = deduped.iter().take(output_size).cloned().collect();

    FunnelOutput {
        merged,
        filtered,
        deduped,
        final_list,
    }
}

/// Cap each duplicate cluster at `top_k` survivors, then re-sort globally.
///
/// Clusters are visited in first-seen order so the grouping itself cannot
/// leak map-iteration nondeterminism into the result.
fn dedup(filtered: &[Candidate], top_k: usize) -> Vec<Candidate> {
    let mut cluster_index: HashMap<u32, usize> = HashMap::new();
    let mut clusters: Vec<Vec<Candidate>> = Vec::new();

    for candidate in filtered {
        let slot = *cluster_index
            .entry(candidate.dup_cluster)
            .or_insert_with(|| {
                clusters.push(Vec::new());
                clusters.len() - 1
            });
        clusters[slot].push(candidate.clone());
    }

    let mut kept: Vec<Candidate> = Vec::with_capacity(filtered.len());
    for mut cluster in clusters {
        sort_desc_stable(&mut cluster, dedup_key);
        cluster.truncate(top_k);
        kept.extend(cluster);
    }

    sort_desc_stable(&mut kept, merge_key);
    kept
}

fn merge_key(c: &Candidate) -> f64 {
    c.recall_confidence.value() + MERGE_FRESHNESS_WEIGHT * c.freshness.value()
}

fn dedup_key(c: &Candidate) -> f64 {
    c.recall_confidence.value() + DEDUP_FRESHNESS_WEIGHT * c.freshness.value()
}

/// Stable descending sort; ties keep input order.
fn sort_desc_stable(items: &mut [Candidate], key: fn(&Candidate) -> f64) {
    items.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
