//! # feedsim-diversity
//!
//! Diversity-phase slot allocation. A continuous exploration ratio maps to
//! one of three phases (optimize / expand / constrain); the allocator
//! assigns core vs. exploration slots, draws categories from interest-aware
//! pools, and feeds simulated positive feedback back into the user's
//! interest profile.

mod allocator;
mod feedback;
mod metrics;
mod phase;

pub use allocator::allocate;
pub use feedback::{like_exploration_item, reset_interest};
pub use metrics::allocation_metrics;
pub use phase::{canonical_ratio, clamp_ratio, phase_from_explore_ratio};
