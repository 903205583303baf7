/// Multiplier applied to the seed when deriving candidate ids.
pub const ID_SEED_MULT: u64 = 9973;

/// Modulus bounding the candidate id space. Collisions are tolerated.
pub const ID_SPACE: u64 = 1_000_000;

/// Id offset stride between recall channels.
pub const CHANNEL_ID_STRIDE: u64 = 100_000;

/// Phase breakpoint: below this explore ratio the allocator optimizes.
pub const PHASE_T1: f64 = 0.12;

/// Phase breakpoint: at or above this explore ratio the allocator constrains.
pub const PHASE_T2: f64 = 0.24;

/// Valid explore-ratio range. Out-of-range inputs are clamped, not rejected.
pub const EXPLORE_RATIO_MIN: f64 = 0.05;
pub const EXPLORE_RATIO_MAX: f64 = 0.35;

/// Default per-duplicate-cluster survivor cap in the funnel.
pub const DEFAULT_DEDUP_TOP_K: usize = 2;

/// Default funnel output size.
pub const DEFAULT_FUNNEL_OUTPUT: usize = 80;

/// Default ranked-list truncation after scoring.
pub const DEFAULT_RANK_TOP_K: usize = 50;

/// Score penalty applied to mid-risk (downranked) candidates.
pub const DEFAULT_DOWNRANK_PENALTY: u8 = 8;

/// Default allocation list length shown by the diversity stage.
pub const DEFAULT_SLOT_COUNT: usize = 12;

/// Exploration slot bounds per allocation.
pub const MIN_EXPLORE_SLOTS: usize = 1;
pub const MAX_EXPLORE_SLOTS: usize = 6;
