//! # feedsim-pipeline
//!
//! Orchestrates the full simulation: generate → funnel → score → top-k →
//! allocate → strategy. Owns the only two pieces of mutable state in the
//! system (the interest profile and the strategy tick) and exposes them as
//! explicit context, never as globals.

mod engine;
mod snapshot;

pub use engine::SimulationEngine;
pub use snapshot::FeedSnapshot;
