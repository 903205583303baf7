//! # feedsim-gen
//!
//! Deterministic candidate generation: a reproducible pseudo-random
//! population per (seed, channel specs) pair. Same inputs ⇒ bit-identical
//! output; a different seed perturbs every derived field.

mod generator;

pub use generator::{generate, generate_pools};
