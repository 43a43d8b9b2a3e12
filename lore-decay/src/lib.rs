//! # lore-decay
//!
//! Converts time since last validation plus a maturity tier into a
//! freshness signal. Three curve families (exponential, linear,
//! logarithmic); four status buckets (fresh, stale, critical, archived).

pub mod curve;
pub mod model;
pub mod status;

pub use model::{DecayModel, DecayState};
pub use status::DecayStatus;
