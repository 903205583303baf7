use tracing::{debug, info};

use feedsim_core::config::SimulationConfig;
use feedsim_core::models::{
    DiversityItem, InterestProfile, StrategyInput, StrategyState,
};
use feedsim_diversity as diversity;
use feedsim_scoring as scoring;

use crate::snapshot::FeedSnapshot;

/// The simulation engine. Stateless per stage; holds the interest profile
/// and the strategy tick across passes so feedback and oscillation carry
/// over between snapshots.
pub struct SimulationEngine {
    config: SimulationConfig,
    interest: InterestProfile,
    strategy: StrategyState,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        let interest = InterestProfile::new(config.diversity.primary_category);
        Self {
            config,
            interest,
            strategy: StrategyState::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn interest(&self) -> &InterestProfile {
        &self.interest
    }

    /// Advance the strategy clock one tick and run a full pass.
    pub fn tick(&mut self) -> FeedSnapshot {
        let clock = self.strategy.advance();
        self.snapshot_at(clock)
    }

    /// Run a full pass at an explicit clock value without advancing state.
    /// Repeated calls at the same clock are bit-identical.
    pub fn snapshot_at(&self, clock: f64) -> FeedSnapshot {
        let seed = self.config.generator.seed;

        // Stage 1: generate the per-channel candidate pools.
        let pools = feedsim_gen::generate_pools(seed, &self.config.generator.channels);
        debug!(
            seed,
            pools = pools.len(),
            candidates = pools.iter().map(Vec::len).sum::<usize>(),
            "generated candidate population"
        );

        // Stage 2: merge → filter → dedup → truncate.
        let funnel = feedsim_funnel::funnel(
            &pools,
            self.config.funnel.dedup_top_k,
            self.config.funnel.output_size,
        );
        debug!(
            merged = funnel.merged.len(),
            filtered = funnel.filtered.len(),
            deduped = funnel.deduped.len(),
            final_list = funnel.final_list.len(),
            "funnel narrowed"
        );

        // Stage 3: multi-objective scoring and gating.
        let scored = scoring::score_with(&funnel.final_list, clock, &self.config.scoring);
        let ranked = scoring::top_k(&scored, self.config.scoring.top_k);
        debug!(scored = scored.len(), ranked = ranked.len(), "scored and ranked");

        // Stage 4: diversity allocation over the slot window.
        let ratio = self.config.diversity.explore_ratio;
        let allocation =
            diversity::allocate(self.config.diversity.slot_count, ratio, &self.interest, seed);
        let metrics = diversity::allocation_metrics(&allocation, &self.interest, ratio);

        // Stage 5: business/ecological adjustment over the ranked feed.
        let inputs: Vec<StrategyInput> = ranked
            .iter()
            .map(|s| StrategyInput {
                id: s.candidate.id,
                base: s.final_score as f64,
            })
            .collect();
        let adjusted =
            feedsim_strategy::apply_strategy(&inputs, clock, self.config.strategy.weights());

        info!(
            clock,
            feed = adjusted.len(),
            diversity = metrics.diversity_score,
            relevance = metrics.relevance_score,
            "pipeline pass complete"
        );

        FeedSnapshot {
            seed,
            clock,
            funnel,
            scored,
            ranked,
            allocation,
            metrics,
            adjusted,
            interest: self.interest,
        }
    }

    /// Simulated positive feedback on an allocated item. Returns the
    /// resulting profile; only expand-phase exploration likes change it.
    pub fn like(&mut self, item: &DiversityItem) -> InterestProfile {
        diversity::like_exploration_item(&mut self.interest, item)
    }

    /// Clear the learned secondary interest.
    pub fn reset_interest(&mut self) -> InterestProfile {
        diversity::reset_interest(&mut self.interest)
    }
}
