//! Shared data model for every pipeline stage.

pub mod candidate;
pub mod category;
pub mod channel;
pub mod diversity;
pub mod interest;
pub mod probability;
pub mod scored;
pub mod strategy;

pub use candidate::Candidate;
pub use category::Category;
pub use channel::{Channel, ChannelSpec, Risk};
pub use diversity::{AllocationMetrics, DiversityItem, Phase, SlotType};
pub use interest::InterestProfile;
pub use probability::Probability;
pub use scored::{Gate, ScoredCandidate};
pub use strategy::{RankedCandidate, StrategyInput, StrategyState, StrategyWeights};
