//! # lore-reinforcement
//!
//! Increment-instead-of-duplicate feedback counters. Each entry gets one
//! lazily created counter of helpful / harmful / neutral signals, from
//! which reliability ratios, a review flag, and dedup decisions derive.

pub mod counter;
pub mod feedback;
pub mod tracker;

pub use counter::{CounterRecord, ReinforcementCounter};
pub use feedback::Feedback;
pub use tracker::ReinforcementTracker;
