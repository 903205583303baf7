//! # feedsim-strategy
//!
//! The strategy oscillator: a time-varying business/ecological adjustment
//! applied after ranking. Pure at any clock value, bounded for all inputs,
//! and cheap enough to re-evaluate every animation tick.

mod oscillator;

pub use oscillator::apply_strategy;
