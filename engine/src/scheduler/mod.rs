//! Scheduler - the fixed-period tick loop.
//!
//! See `engine.rs` for the tick pipeline and `checkpoint.rs` for
//! pause/resume snapshots.

pub mod checkpoint;
pub mod engine;

// Re-export main types for convenience
pub use checkpoint::{compute_state_hash, validate_snapshot, StateSnapshot};
pub use engine::{Scheduler, SchedulerConfig, SimulationError, TickResult};
