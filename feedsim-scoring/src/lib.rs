//! # feedsim-scoring
//!
//! Multi-objective scoring: per-candidate logistic heads (click, watch,
//! engage, satisfy), weighted fusion into one [0, 100] scalar, and
//! risk-based gating (hard filter / soft downrank). Deterministic at any
//! fixed clock value.

mod objectives;
mod scorer;

pub use objectives::ObjectiveHeads;
pub use scorer::{score, score_with, top_k};
