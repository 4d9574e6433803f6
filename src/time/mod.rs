//! Time sources and the elapsed/total bookkeeping built on them.
//!
//! `clock` holds the pluggable millisecond sources; `tracker` owns the
//! checkpoint baseline shared by every caller of a logger.

pub mod clock;
pub mod tracker;

// Re-export for convenience
pub use clock::*;
pub use tracker::{Stamp, TimingTracker};
