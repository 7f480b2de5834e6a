//! Shared utilities.

/// Elapsed-time sources for frame timing.
pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
