use feedsim_core::constants::{EXPLORE_RATIO_MAX, EXPLORE_RATIO_MIN, PHASE_T1, PHASE_T2};
use feedsim_core::models::Phase;

/// Clamp an exploration ratio into its valid range. Out-of-range input is a
/// degenerate configuration, not an error.
pub fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(EXPLORE_RATIO_MIN, EXPLORE_RATIO_MAX)
}

/// Pure step function from exploration ratio to phase.
///
/// The phase is never stored: anything that wants to "select" a phase must
/// set the ratio to that phase's canonical value instead, so the two can
/// never diverge.
pub fn phase_from_explore_ratio(ratio: f64) -> Phase {
    let r = clamp_ratio(ratio);
    if r < PHASE_T1 {
        Phase::Optimize
    } else if r < PHASE_T2 {
        Phase::Expand
    } else {
        Phase::Constrain
    }
}

/// Representative ratio for a phase, for UI controls that pick phases.
pub fn canonical_ratio(phase: Phase) -> f64 {
    match phase {
        Phase::Optimize => 0.08,
        Phase::Expand => 0.18,
        Phase::Constrain => 0.30,
    }
}
