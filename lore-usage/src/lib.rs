//! # lore-usage
//!
//! Records usage signals (access, citation, feedback, corrections, stale
//! flags) per entry and folds them into a weighted raw score squashed to
//! `[0, 1]` with a logistic curve.

pub mod event;
pub mod score;
pub mod signal;
pub mod tracker;

pub use event::UsageEvent;
pub use score::UsageScore;
pub use signal::UsageSignal;
pub use tracker::UsageTracker;
