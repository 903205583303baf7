//! # feedsim-funnel
//!
//! The narrowing sequence merge → filter → dedup → truncate applied to the
//! per-channel candidate pools. All four intermediate lists are exposed so
//! a presentation layer can step through them.

mod stages;

pub use stages::{funnel, FunnelOutput};
