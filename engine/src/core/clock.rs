//! Time source for the simulation
//!
//! All stage advancement is driven by wall-clock millisecond timestamps
//! compared against per-stage dwell times. The scheduler never reads
//! ambient time directly; it is handed a `Clock` so that tests can drive
//! the simulation deterministically without sleeping.

use chrono::{DateTime, NaiveDate};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Unix timestamp in milliseconds.
pub type TimestampMs = i64;

/// Default scheduler period: one tick per second.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 1_000;

/// Source of current time for the scheduler and derivation.
///
/// `today()` is derived from `now_ms()` so that a manually-driven clock
/// yields consistent dates (due dates, billing period labels) without a
/// second knob.
pub trait Clock: Send {
    /// Current time as unix milliseconds.
    fn now_ms(&self) -> TimestampMs;

    /// Current calendar date (UTC), derived from `now_ms`.
    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_ms())
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

/// Real wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually-driven clock for deterministic tests.
///
/// Cloning yields a handle to the same underlying instant, so a test can
/// hand one clone to the scheduler and keep another to advance time.
///
/// # Example
/// ```
/// use portal_lifecycle_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000_000);
/// let handle = clock.clone();
///
/// handle.advance(5_001);
/// assert_eq!(clock.now_ms(), 1_005_001);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a manual clock at the given unix-millisecond instant.
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Move the clock forward by `delta_ms` milliseconds.
    pub fn advance(&self, delta_ms: TimestampMs) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Set the clock to an absolute instant.
    pub fn set(&self, now_ms: TimestampMs) {
        self.now.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}
