use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Weights for the business/ecological adjustment, typically UI sliders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyWeights {
    pub biz: f64,
    pub eco: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self { biz: 1.0, eco: 1.0 }
    }
}

/// Minimal input to the strategy stage: an id and a base score in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyInput {
    pub id: u64,
    pub base: f64,
}

/// Strategy stage output: base score plus the oscillating adjustments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedCandidate {
    pub id: u64,
    pub base: f64,
    /// Business oscillation in [-0.8, 0.8].
    pub biz: f64,
    /// Ecological oscillation in [-0.8, 0.8].
    pub eco: f64,
    /// Adjusted score in [0, 100].
    pub final_score: f64,
}

/// Monotonically increasing tick driving the strategy oscillator.
/// Not persisted across sessions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyState {
    pub tick: u64,
}

impl StrategyState {
    /// Clock advance per tick.
    pub const TICK_STEP: f64 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    pub fn clock(self) -> f64 {
        self.tick as f64 * Self::TICK_STEP
    }

    /// Advance one tick and return the new clock value.
    pub fn advance(&mut self) -> f64 {
        self.tick += 1;
        self.clock()
    }
}
