//! # feedsim-core
//!
//! Foundation crate for the Feedsim recommendation simulation.
//! Defines all shared types, config, errors, constants, and the
//! deterministic noise primitives the stage crates are built on.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod noise;

// Re-export the most commonly used types at the crate root.
pub use config::SimulationConfig;
pub use errors::{SimError, SimResult};
pub use models::{
    Candidate, Category, Channel, ChannelSpec, DiversityItem, Gate, InterestProfile, Phase,
    Probability, RankedCandidate, Risk, ScoredCandidate, SlotType, StrategyState, StrategyWeights,
};
