//! Core utilities: time management.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock, TimestampMs, DEFAULT_TICK_PERIOD_MS};
